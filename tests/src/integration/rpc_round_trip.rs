//! # RPC Round Trip
//!
//! Decoded JSON-RPC calls through [`KeywordRpcHandler`] into the real
//! dispatcher and back out as JSON values or serialized faults.

#[cfg(test)]
mod tests {
    use crate::support::{dispatcher_with, fast_config, recording_ledger};
    use kw_04_command_dispatch::rpc::{GET_KEYWORD_NAMES, RUN_KEYWORD};
    use kw_04_command_dispatch::{codes, KeywordApi, KeywordRpcHandler};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn rpc() -> KeywordRpcHandler {
        let (ledger, _) = recording_ledger();
        let api: Arc<dyn KeywordApi> = dispatcher_with(fast_config(), &ledger);
        KeywordRpcHandler::new(api)
    }

    async fn run(handler: &KeywordRpcHandler, params: Value) -> Result<Value, Value> {
        handler
            .handle(RUN_KEYWORD, Some(&params))
            .await
            .map_err(|fault| serde_json::to_value(fault).unwrap())
    }

    #[tokio::test]
    async fn test_get_keyword_names() {
        let names = rpc().handle(GET_KEYWORD_NAMES, None).await.unwrap();
        assert_eq!(
            names,
            json!(["keyword 1", "keyword 2", "keyword 3", "keyword 4"])
        );
    }

    #[tokio::test]
    async fn test_run_simple_keywords() {
        let handler = rpc();

        assert_eq!(
            run(&handler, json!(["keyword 1", []])).await.unwrap(),
            json!({"status": "PASS", "output": "Executed keyword 1", "return": 2})
        );
        assert_eq!(
            run(&handler, json!(["keyword 1"])).await.unwrap()["return"],
            json!(2)
        );
        assert_eq!(
            run(&handler, json!(["keyword 2", ["Z"]])).await.unwrap(),
            json!({"status": "PASS", "output": "Executed keyword 2", "return": "Z"})
        );
        assert_eq!(
            run(&handler, json!(["keyword 2", ["0"]])).await.unwrap()["status"],
            json!("FAIL")
        );
        assert_eq!(
            run(&handler, json!(["keyword 4", ["x", "y", "z"]])).await.unwrap()["return"],
            json!(["x", "y", "z"])
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_run_keyword_3() {
        let result = run(&rpc(), json!(["keyword 3", ["a", "b"]])).await.unwrap();
        assert_eq!(
            result,
            json!({
                "status": "PASS",
                "output": "Executed keyword 3",
                "return": ["one", "two", "three"]
            })
        );
    }

    #[tokio::test]
    async fn test_faults_serialize_with_codes() {
        let handler = rpc();

        let unknown = run(&handler, json!(["keyword 0", []])).await.unwrap_err();
        assert_eq!(
            unknown,
            json!({"code": codes::METHOD_NOT_FOUND, "message": "Unknown command: keyword 0"})
        );

        let empty = run(&handler, json!(["keyword 2", [""]])).await.unwrap_err();
        assert_eq!(empty["code"], json!(codes::INVALID_PARAMS));

        let wrong_type = run(&handler, json!(["keyword 2", [42]])).await.unwrap_err();
        assert_eq!(wrong_type["code"], json!(codes::INVALID_PARAMS));

        let bad_shape = run(&handler, json!({"keyword": "keyword 1"})).await.unwrap_err();
        assert_eq!(bad_shape["code"], json!(codes::INVALID_PARAMS));

        let method = handler.handle("stop_remote_server", None).await.unwrap_err();
        assert_eq!(method.code, codes::METHOD_NOT_FOUND);
    }
}
