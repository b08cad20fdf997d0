use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use dehix_hire::config::HireConfig;
use dehix_hire::pipeline::{
    FreelancerProfile, HirePipelineService, InMemoryConnectsLedger, InMemoryFreelancerDirectory,
    InMemoryHireRequestStore, RecordingNotificationSink,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ApiService = HirePipelineService<
    InMemoryHireRequestStore,
    InMemoryConnectsLedger,
    RecordingNotificationSink,
    InMemoryFreelancerDirectory,
>;

pub(crate) struct PipelineStack {
    pub(crate) service: Arc<ApiService>,
    pub(crate) ledger: Arc<InMemoryConnectsLedger>,
    pub(crate) sink: Arc<RecordingNotificationSink>,
    pub(crate) directory: Arc<InMemoryFreelancerDirectory>,
}

/// Assemble the pipeline over in-memory adapters. The document store and the
/// ledger/profile/notification collaborators are process-local stand-ins
/// until the external services are wired in.
pub(crate) fn build_stack(config: HireConfig) -> PipelineStack {
    let store = Arc::new(InMemoryHireRequestStore::new());
    let ledger = Arc::new(InMemoryConnectsLedger::new());
    let sink = Arc::new(RecordingNotificationSink::new());
    let directory = Arc::new(InMemoryFreelancerDirectory::new());

    let service = Arc::new(HirePipelineService::new(
        store,
        ledger.clone(),
        sink.clone(),
        directory.clone(),
        config,
    ));

    PipelineStack {
        service,
        ledger,
        sink,
        directory,
    }
}

/// Seed a business account and a pair of freelancer profiles so the service
/// is usable out of the box.
pub(crate) fn seed_sample_data(stack: &PipelineStack) {
    stack.ledger.open_account("demo-business", 500);
    stack.directory.register(FreelancerProfile {
        id: "free-001".to_string(),
        user_name: "aarav.sharma".to_string(),
        email: "aarav@example.com".to_string(),
    });
    stack.directory.register(FreelancerProfile {
        id: "free-002".to_string(),
        user_name: "meera.patel".to_string(),
        email: "meera@example.com".to_string(),
    });

    info!(
        business_id = "demo-business",
        connects = 500,
        freelancers = 2,
        "seeded in-memory collaborators"
    );
}
