use crate::fixtures::{endpoint_point, RecordingObserver, TEST_NETWORK_ONE, TEST_NETWORK_TWO};
use std::sync::Arc;
use weft_core::application::{RunObserver, TransactionExecutor};
use weft_core::domain::PendingTransaction;
use weft_core::infrastructure::config::ExecutorConfig;
use weft_core::infrastructure::resolver::mock::{MockSignerResolver, SubmissionScript};
use weft_core::WiringError;

fn sequenced_transactions(network: &str, count: u8) -> Vec<PendingTransaction> {
    (0..count)
        .map(|idx| PendingTransaction::new(endpoint_point(network), format!("tx-{idx}"), vec![idx]))
        .collect()
}

#[tokio::test]
async fn test_executor_when_submission_rejected_then_later_transactions_never_submit() {
    let signer_resolver = Arc::new(MockSignerResolver::new().with_scripted_network(
        TEST_NETWORK_ONE,
        vec![SubmissionScript::Confirm, SubmissionScript::Reject { details: "reverted".to_string() }],
    ));
    let executor = TransactionExecutor::new(signer_resolver.clone(), &ExecutorConfig::default());

    let err = executor.execute(sequenced_transactions(TEST_NETWORK_ONE, 4)).await.unwrap_err();
    match err {
        WiringError::SubmissionRejected { description, details, .. } => {
            assert_eq!(description, "tx-1");
            assert!(details.contains("reverted"));
        }
        other => panic!("expected SubmissionRejected, got {other:?}"),
    }

    // Only the first transaction was accepted; nothing after the failure.
    let payloads: Vec<Vec<u8>> = signer_resolver.hub().submissions().into_iter().map(|(_, payload)| payload).collect();
    assert_eq!(payloads, vec![vec![0]]);
}

#[tokio::test]
async fn test_executor_when_confirmation_fails_then_attempts_stop_at_failure() {
    let signer_resolver = Arc::new(MockSignerResolver::new().with_scripted_network(
        TEST_NETWORK_ONE,
        vec![SubmissionScript::Confirm, SubmissionScript::Confirm, SubmissionScript::FailConfirmation { details: "orphaned".to_string() }],
    ));
    let executor = TransactionExecutor::new(signer_resolver.clone(), &ExecutorConfig::default());

    let err = executor.execute(sequenced_transactions(TEST_NETWORK_ONE, 5)).await.unwrap_err();
    match err {
        WiringError::ConfirmationFailed { description, submission_hash, details, .. } => {
            assert_eq!(description, "tx-2");
            assert!(!submission_hash.is_empty());
            assert!(details.contains("orphaned"));
        }
        other => panic!("expected ConfirmationFailed, got {other:?}"),
    }

    // Transactions 0..=2 were submitted in order; 3 and 4 were not attempted.
    let payloads: Vec<Vec<u8>> = signer_resolver.hub().submissions().into_iter().map(|(_, payload)| payload).collect();
    assert_eq!(payloads, vec![vec![0], vec![1], vec![2]]);
}

#[tokio::test]
async fn test_executor_when_signer_missing_then_aborts_before_any_submission() {
    // Network 2 has no signer; the preflight must catch it even though the
    // first transaction targets network 1.
    let signer_resolver = Arc::new(MockSignerResolver::new().with_network(TEST_NETWORK_ONE));
    let observer = RecordingObserver::new();
    let executor = TransactionExecutor::with_observer(
        signer_resolver.clone(),
        &ExecutorConfig::default(),
        Arc::clone(&observer) as Arc<dyn RunObserver>,
    );

    let transactions = vec![
        PendingTransaction::new(endpoint_point(TEST_NETWORK_ONE), "set default lib", vec![0x01]),
        PendingTransaction::new(endpoint_point(TEST_NETWORK_TWO), "set default lib", vec![0x02]),
    ];
    let err = executor.execute(transactions).await.unwrap_err();
    match err {
        WiringError::NoSignerConfigured { network } => assert_eq!(network, TEST_NETWORK_TWO),
        other => panic!("expected NoSignerConfigured, got {other:?}"),
    }
    assert_eq!(signer_resolver.hub().submission_count(), 0);
    assert!(!observer.events().iter().any(|event| event.starts_with("submitted")));
}

#[tokio::test]
async fn test_executor_when_confirmation_hangs_then_times_out_with_submission_hash() {
    let signer_resolver =
        Arc::new(MockSignerResolver::new().with_scripted_network(TEST_NETWORK_ONE, vec![SubmissionScript::HangConfirmation]));
    let observer = RecordingObserver::new();
    let config = ExecutorConfig { confirmation_timeout_seconds: 1 };
    let executor =
        TransactionExecutor::with_observer(signer_resolver.clone(), &config, Arc::clone(&observer) as Arc<dyn RunObserver>);

    let transactions = vec![PendingTransaction::new(endpoint_point(TEST_NETWORK_ONE), "set default lib", vec![0x01])];
    let err = executor.execute(transactions).await.unwrap_err();
    match err {
        WiringError::ConfirmationTimeout { submission_hash, timeout_secs, .. } => {
            assert_eq!(submission_hash, "0xsub-1-1");
            assert_eq!(timeout_secs, 1);
        }
        other => panic!("expected ConfirmationTimeout, got {other:?}"),
    }

    let events = observer.events();
    assert!(events.iter().any(|event| event.starts_with("submitted")));
    assert!(events.last().expect("events").starts_with("failed"));
}

#[tokio::test]
async fn test_executor_when_input_empty_then_completes_without_io() {
    let signer_resolver = Arc::new(MockSignerResolver::new());
    let observer = RecordingObserver::new();
    let executor = TransactionExecutor::with_observer(
        signer_resolver.clone(),
        &ExecutorConfig::default(),
        Arc::clone(&observer) as Arc<dyn RunObserver>,
    );

    let report = executor.execute(Vec::new()).await.expect("execute");
    assert_eq!(report.confirmed_count(), 0);
    assert_eq!(signer_resolver.resolve_calls(), 0);
    assert_eq!(observer.events(), vec!["started count=0".to_string(), "completed count=0".to_string()]);
}

#[tokio::test]
async fn test_executor_when_networks_repeat_then_signer_resolved_once_per_network() {
    let signer_resolver =
        Arc::new(MockSignerResolver::new().with_network(TEST_NETWORK_ONE).with_network(TEST_NETWORK_TWO));
    let executor = TransactionExecutor::new(signer_resolver.clone(), &ExecutorConfig::default());

    let mut transactions = sequenced_transactions(TEST_NETWORK_ONE, 2);
    transactions.extend(sequenced_transactions(TEST_NETWORK_TWO, 2));
    transactions.extend(sequenced_transactions(TEST_NETWORK_ONE, 1));

    let report = executor.execute(transactions).await.expect("execute");
    assert_eq!(report.confirmed_count(), 5);
    assert_eq!(signer_resolver.resolve_calls(), 2);
}
