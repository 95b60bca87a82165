use k8s_openapi::api::core::v1::{Container, Pod, PodSpec};

pub const DEFAULT_NAMESPACE: &str = "default";
pub const DNS_CLUSTER_FIRST: &str = "ClusterFirst";
pub const RESTART_POLICY_ALWAYS: &str = "Always";
pub const TERMINATION_MESSAGE_FALLBACK_TO_LOGS_ON_ERROR: &str = "FallbackToLogsOnError";

/// Fills the fields an API server would default on create. Fields that are
/// already set are left alone, so applying this twice changes nothing.
///
/// # Arguments
/// - `pod`: versioned pod to default in place.
/// - `scheduler_name`: scheduler the pod is handed to when it names none.
pub fn set_defaults(pod: &mut Pod, scheduler_name: &str) {
    set_if_unset(&mut pod.metadata.namespace, DEFAULT_NAMESPACE);

    let spec = pod.spec.get_or_insert_with(PodSpec::default);

    // ties the pod to the simulated scheduler instance
    set_if_unset(&mut spec.scheduler_name, scheduler_name);
    set_if_unset(&mut spec.dns_policy, DNS_CLUSTER_FIRST);
    set_if_unset(&mut spec.restart_policy, RESTART_POLICY_ALWAYS);

    let init_containers = spec.init_containers.iter_mut().flatten();
    for container in spec.containers.iter_mut().chain(init_containers) {
        set_container_defaults(container);
    }
}

fn set_container_defaults(container: &mut Container) {
    set_if_unset(
        &mut container.termination_message_policy,
        TERMINATION_MESSAGE_FALLBACK_TO_LOGS_ON_ERROR,
    );
}

fn set_if_unset(field: &mut Option<String>, value: &str) {
    if field.as_deref().map_or(true, str::is_empty) {
        *field = Some(value.to_string());
    }
}
