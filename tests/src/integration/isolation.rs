//! # Failure Isolation
//!
//! A failing or timed-out keyword 3 run is fatal only to its own invocation.
//!
//! ## Flows Tested:
//!
//! 1. **Capacity failure**: worker aborts mid-production, the next run on the
//!    same ledger continues the counter without gaps
//! 2. **Join timeout**: worker is cancelled and reaped, no run keeps logging
//!    after the fault is returned
//! 3. **Validation before spawn**: malformed calls never reach the worker

#[cfg(test)]
mod tests {
    use crate::support::{dispatcher_with, fast_config, init_test_logging, is_gapless, recording_ledger};
    use kw_01_ordered_list::StoreConfig;
    use kw_04_command_dispatch::{codes, DispatchError, Fault, KeywordApi};
    use serde_json::json;
    use std::time::Duration;

    fn keyword_3_args() -> [serde_json::Value; 2] {
        [json!("a"), json!("b")]
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_capacity_failure_then_success_continues_counter() {
        init_test_logging();
        let (ledger, sink) = recording_ledger();

        let mut failing = fast_config();
        failing.worker.store = StoreConfig { max_items: 7 };
        let failing = dispatcher_with(failing, &ledger);
        let healthy = dispatcher_with(fast_config(), &ledger);

        let err = failing
            .invoke("keyword 3", &keyword_3_args())
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::HandlerExecutionFailure { .. }));
        assert_eq!(Fault::from(err).code, codes::EXECUTION_ERROR);
        assert_eq!(ledger.counter(), 7);

        let ok = healthy
            .invoke("keyword 3", &keyword_3_args())
            .await
            .unwrap();
        assert!(ok.is_pass());

        assert_eq!(ledger.counter(), 27);
        assert!(is_gapless(&sink.counters()));
        assert_eq!(ledger.last_message().as_deref(), Some("T"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_repeated_failures_leave_ledger_usable() {
        let (ledger, sink) = recording_ledger();
        let mut config = fast_config();
        config.worker.store = StoreConfig { max_items: 1 };
        let dispatcher = dispatcher_with(config, &ledger);

        for _ in 0..5 {
            let err = dispatcher
                .invoke("keyword 3", &keyword_3_args())
                .await
                .unwrap_err();
            assert!(err.to_string().contains("capacity exceeded"));
        }

        assert_eq!(ledger.counter(), 5);
        assert!(is_gapless(&sink.counters()));

        let ok = dispatcher.invoke("keyword 1", &[]).await.unwrap();
        assert!(ok.is_pass());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_join_timeout_cancels_and_reaps_worker() {
        init_test_logging();
        let (ledger, sink) = recording_ledger();
        let mut config = fast_config();
        config.worker.step_interval_ms = 40;
        config.join_timeout_ms = 100;
        let dispatcher = dispatcher_with(config, &ledger);

        let err = dispatcher
            .invoke("keyword 3", &keyword_3_args())
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::HandlerExecutionFailure { .. }));
        assert!(err.to_string().contains("did not finish within 100ms"));

        let after_fault = ledger.counter();
        assert!(after_fault < 20);

        // The cancelled run was joined before the fault came back
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(ledger.counter(), after_fault);
        assert!(is_gapless(&sink.counters()));

        let ok = dispatcher.invoke("keyword 2", &[json!("Q")]).await.unwrap();
        assert!(ok.is_pass());
    }

    #[tokio::test]
    async fn test_malformed_keyword_3_never_spawns() {
        let (ledger, sink) = recording_ledger();
        let dispatcher = dispatcher_with(fast_config(), &ledger);

        let cases = [
            vec![],
            vec![json!("a")],
            vec![json!("a"), json!(2)],
            vec![json!("a"), json!("b"), json!("c")],
        ];

        for args in cases {
            let fault = Fault::from(dispatcher.invoke("keyword 3", &args).await.unwrap_err());
            assert_eq!(fault.code, codes::INVALID_PARAMS, "args {args:?}");
        }

        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_command_is_method_not_found() {
        let (ledger, _) = recording_ledger();
        let dispatcher = dispatcher_with(fast_config(), &ledger);

        let fault = Fault::from(dispatcher.invoke("keyword 5", &[]).await.unwrap_err());
        assert_eq!(fault.code, codes::METHOD_NOT_FOUND);
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(16))]

        #[test]
        fn prop_any_capacity_keeps_counter_gapless(max_items in 1usize..=30) {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .unwrap();

            let (ledger, sink) = recording_ledger();
            let mut config = fast_config();
            config.worker.store = StoreConfig { max_items };
            let dispatcher = dispatcher_with(config, &ledger);

            let outcome = runtime.block_on(dispatcher.invoke("keyword 3", &keyword_3_args()));

            proptest::prop_assert_eq!(outcome.is_ok(), max_items >= 20);
            proptest::prop_assert_eq!(ledger.counter(), max_items.min(20) as u64);
            proptest::prop_assert!(is_gapless(&sink.counters()));
        }
    }
}
