//! Create-time validation of internal pods.
//!
//! Every rule runs regardless of earlier failures; the returned list holds all
//! violations in the order they were found.

use std::collections::{BTreeMap, HashSet};
use std::net::IpAddr;

use super::naming::{
    is_dns1123_label, is_dns1123_subdomain, is_qualified_name, is_valid_label_value,
    is_valid_port_name,
};
use crate::models::field_error::{FieldError, FieldPath};
use crate::models::pod::{
    Container, DnsPolicy, ObjectMeta, Pod, PodSpec, Protocol, PullPolicy, ResourceRequirements,
    RestartPolicy, TerminationMessagePolicy,
};
use crate::models::quantity::Quantity;

pub const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;
pub const MAX_DNS_NAMESERVERS: usize = 3;
pub const MAX_DNS_SEARCH_PATHS: usize = 6;

const STANDARD_CONTAINER_RESOURCES: &[&str] = &["cpu", "memory", "ephemeral-storage"];
const HUGE_PAGES_PREFIX: &str = "hugepages-";

/// Runs the checks an API server applies when a pod is created.
pub fn validate_pod_create(pod: &Pod) -> Vec<FieldError> {
    let mut errors = validate_metadata(&pod.metadata, &FieldPath::new("metadata"));
    errors.extend(validate_spec(&pod.spec, &FieldPath::new("spec")));
    errors
}

fn push_invalid(errors: &mut Vec<FieldError>, path: &FieldPath, value: &str, messages: Vec<String>) {
    errors.extend(
        messages
            .into_iter()
            .map(|message| FieldError::invalid(path, value, message)),
    );
}

fn validate_metadata(metadata: &ObjectMeta, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !metadata.generate_name.is_empty() {
        push_invalid(
            &mut errors,
            &path.child("generateName"),
            &metadata.generate_name,
            is_dns1123_subdomain(&mask_trailing_dash(&metadata.generate_name)),
        );
    }

    // no name is generated before validation, so a prefix alone is not enough
    if metadata.name.is_empty() {
        errors.push(FieldError::required(&path.child("name"), "name or generateName is required"));
    } else {
        push_invalid(
            &mut errors,
            &path.child("name"),
            &metadata.name,
            is_dns1123_subdomain(&metadata.name),
        );
    }

    if !metadata.namespace.is_empty() {
        push_invalid(
            &mut errors,
            &path.child("namespace"),
            &metadata.namespace,
            is_dns1123_label(&metadata.namespace),
        );
    }

    errors.extend(validate_labels(&metadata.labels, &path.child("labels")));
    errors.extend(validate_annotations(&metadata.annotations, &path.child("annotations")));
    errors
}

/// A generated name gets a random suffix, so one trailing dash is allowed.
fn mask_trailing_dash(prefix: &str) -> String {
    match prefix.strip_suffix('-') {
        Some(head) if !head.is_empty() => format!("{}a", head),
        _ => prefix.to_owned(),
    }
}

fn validate_labels(labels: &BTreeMap<String, String>, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (key, value) in labels {
        push_invalid(&mut errors, path, key, is_qualified_name(key));
        push_invalid(&mut errors, path, value, is_valid_label_value(value));
    }
    errors
}

fn validate_annotations(annotations: &BTreeMap<String, String>, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut total_size = 0;
    for (key, value) in annotations {
        push_invalid(&mut errors, path, key, is_qualified_name(&key.to_lowercase()));
        total_size += key.len() + value.len();
    }
    if total_size > TOTAL_ANNOTATION_SIZE_LIMIT {
        errors.push(FieldError::too_long(path, TOTAL_ANNOTATION_SIZE_LIMIT));
    }
    errors
}

fn validate_spec(spec: &PodSpec, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let (volumes, volume_errors) = validate_volumes(spec, &path.child("volumes"));
    errors.extend(volume_errors);

    let mut container_names = HashSet::new();
    errors.extend(validate_containers(
        &spec.containers,
        &volumes,
        &mut container_names,
        &path.child("containers"),
    ));
    if spec.containers.is_empty() {
        errors.push(FieldError::required(&path.child("containers"), ""));
    }
    errors.extend(validate_containers(
        &spec.init_containers,
        &volumes,
        &mut container_names,
        &path.child("initContainers"),
    ));
    if !spec.ephemeral_containers.is_empty() {
        errors.push(FieldError::forbidden(
            &path.child("ephemeralContainers"),
            "cannot be set on create",
        ));
    }

    match &spec.restart_policy {
        RestartPolicy::Unset => errors.push(FieldError::required(&path.child("restartPolicy"), "")),
        RestartPolicy::Unsupported(value) => errors.push(FieldError::not_supported(
            &path.child("restartPolicy"),
            value,
            RestartPolicy::SUPPORTED,
        )),
        _ => {}
    }

    errors.extend(validate_dns(spec, path));

    if !spec.scheduler_name.is_empty() {
        push_invalid(
            &mut errors,
            &path.child("schedulerName"),
            &spec.scheduler_name,
            is_dns1123_subdomain(&spec.scheduler_name),
        );
    }
    if !spec.service_account_name.is_empty() {
        push_invalid(
            &mut errors,
            &path.child("serviceAccountName"),
            &spec.service_account_name,
            is_dns1123_subdomain(&spec.service_account_name),
        );
    }
    if !spec.node_name.is_empty() {
        push_invalid(
            &mut errors,
            &path.child("nodeName"),
            &spec.node_name,
            is_dns1123_subdomain(&spec.node_name),
        );
    }
    if !spec.priority_class_name.is_empty() {
        push_invalid(
            &mut errors,
            &path.child("priorityClassName"),
            &spec.priority_class_name,
            is_dns1123_subdomain(&spec.priority_class_name),
        );
    }

    errors.extend(validate_labels(&spec.node_selector, &path.child("nodeSelector")));

    if let Some(seconds) = spec.active_deadline_seconds {
        if seconds <= 0 {
            errors.push(FieldError::invalid(
                &path.child("activeDeadlineSeconds"),
                &seconds.to_string(),
                "must be greater than 0",
            ));
        }
    }
    if let Some(seconds) = spec.termination_grace_period_seconds {
        if seconds < 0 {
            errors.push(FieldError::invalid(
                &path.child("terminationGracePeriodSeconds"),
                &seconds.to_string(),
                "must be greater than or equal to 0",
            ));
        }
    }

    if spec.host_network {
        errors.extend(validate_host_network(spec, path));
    }

    errors
}

/// Checks volume names and returns the set of declared ones for mount lookups.
fn validate_volumes(spec: &PodSpec, path: &FieldPath) -> (HashSet<String>, Vec<FieldError>) {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for (i, volume) in spec.volumes.iter().enumerate() {
        let name_path = path.index(i).child("name");
        if volume.name.is_empty() {
            errors.push(FieldError::required(&name_path, ""));
            continue;
        }
        push_invalid(&mut errors, &name_path, &volume.name, is_dns1123_label(&volume.name));
        if !names.insert(volume.name.clone()) {
            errors.push(FieldError::duplicate(&name_path, &volume.name));
        }
    }

    (names, errors)
}

fn validate_containers(
    containers: &[Container],
    volumes: &HashSet<String>,
    names: &mut HashSet<String>,
    path: &FieldPath,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (i, container) in containers.iter().enumerate() {
        errors.extend(validate_container(container, volumes, names, &path.index(i)));
    }
    errors
}

fn validate_container(
    container: &Container,
    volumes: &HashSet<String>,
    names: &mut HashSet<String>,
    path: &FieldPath,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let name_path = path.child("name");
    if container.name.is_empty() {
        errors.push(FieldError::required(&name_path, ""));
    } else {
        push_invalid(&mut errors, &name_path, &container.name, is_dns1123_label(&container.name));
        if !names.insert(container.name.clone()) {
            errors.push(FieldError::duplicate(&name_path, &container.name));
        }
    }

    if container.image.trim().is_empty() {
        errors.push(FieldError::required(&path.child("image"), ""));
    }

    match &container.termination_message_policy {
        TerminationMessagePolicy::Unset => {
            errors.push(FieldError::required(&path.child("terminationMessagePolicy"), ""))
        }
        TerminationMessagePolicy::Unsupported(value) => errors.push(FieldError::not_supported(
            &path.child("terminationMessagePolicy"),
            value,
            TerminationMessagePolicy::SUPPORTED,
        )),
        _ => {}
    }

    errors.extend(validate_ports(container, &path.child("ports")));

    for (i, mount) in container.volume_mounts.iter().enumerate() {
        let mount_path = path.child("volumeMounts").index(i);
        if mount.name.is_empty() {
            errors.push(FieldError::required(&mount_path.child("name"), ""));
        } else if !volumes.contains(&mount.name) {
            errors.push(FieldError::not_found(&mount_path.child("name"), &mount.name));
        }
        if mount.mount_path.is_empty() {
            errors.push(FieldError::required(&mount_path.child("mountPath"), ""));
        }
    }

    match &container.image_pull_policy {
        PullPolicy::Unset => errors.push(FieldError::required(&path.child("imagePullPolicy"), "")),
        PullPolicy::Unsupported(value) => errors.push(FieldError::not_supported(
            &path.child("imagePullPolicy"),
            value,
            PullPolicy::SUPPORTED,
        )),
        _ => {}
    }

    errors.extend(validate_resources(&container.resources, &path.child("resources")));
    errors
}

fn is_valid_port_number(port: i32) -> bool {
    (1..=65535).contains(&port)
}

fn validate_ports(container: &Container, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut port_names = HashSet::new();

    for (i, port) in container.ports.iter().enumerate() {
        let port_path = path.index(i);

        if !port.name.is_empty() {
            let name_path = port_path.child("name");
            push_invalid(&mut errors, &name_path, &port.name, is_valid_port_name(&port.name));
            if !port_names.insert(port.name.as_str()) {
                errors.push(FieldError::duplicate(&name_path, &port.name));
            }
        }

        if port.container_port == 0 {
            errors.push(FieldError::required(&port_path.child("containerPort"), ""));
        } else if !is_valid_port_number(port.container_port) {
            errors.push(FieldError::invalid(
                &port_path.child("containerPort"),
                &port.container_port.to_string(),
                "must be between 1 and 65535, inclusive",
            ));
        }

        if port.host_port != 0 && !is_valid_port_number(port.host_port) {
            errors.push(FieldError::invalid(
                &port_path.child("hostPort"),
                &port.host_port.to_string(),
                "must be between 1 and 65535, inclusive",
            ));
        }

        match &port.protocol {
            Protocol::Unset => errors.push(FieldError::required(&port_path.child("protocol"), "")),
            Protocol::Unsupported(value) => errors.push(FieldError::not_supported(
                &port_path.child("protocol"),
                value,
                Protocol::SUPPORTED,
            )),
            _ => {}
        }
    }

    errors
}

fn is_standard_container_resource(name: &str) -> bool {
    STANDARD_CONTAINER_RESOURCES.contains(&name) || name.starts_with(HUGE_PAGES_PREFIX)
}

fn validate_resource_name(name: &str, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if is_standard_container_resource(name) {
        return errors;
    }
    if !name.contains('/') {
        errors.push(FieldError::invalid(
            path,
            name,
            "must be a standard resource for containers",
        ));
    } else {
        push_invalid(&mut errors, path, name, is_qualified_name(name));
    }
    errors
}

fn validate_quantity(quantity: &Quantity, path: &FieldPath) -> Option<FieldError> {
    if quantity.is_negative() {
        Some(FieldError::invalid(
            path,
            quantity.as_str(),
            "must be greater than or equal to 0",
        ))
    } else {
        None
    }
}

fn validate_resources(resources: &ResourceRequirements, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let limits_path = path.child("limits");
    for (name, quantity) in &resources.limits {
        let quantity_path = limits_path.key(name);
        errors.extend(validate_resource_name(name, &quantity_path));
        errors.extend(validate_quantity(quantity, &quantity_path));
    }

    let requests_path = path.child("requests");
    for (name, quantity) in &resources.requests {
        let quantity_path = requests_path.key(name);
        errors.extend(validate_resource_name(name, &quantity_path));
        errors.extend(validate_quantity(quantity, &quantity_path));

        if let Some(limit) = resources.limits.get(name) {
            if quantity > limit {
                errors.push(FieldError::invalid(
                    &quantity_path,
                    quantity.as_str(),
                    format!("must be less than or equal to {} limit", name),
                ));
            }
        }
    }

    errors
}

fn validate_dns(spec: &PodSpec, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match &spec.dns_policy {
        DnsPolicy::Unset => errors.push(FieldError::required(&path.child("dnsPolicy"), "")),
        DnsPolicy::Unsupported(value) => errors.push(FieldError::not_supported(
            &path.child("dnsPolicy"),
            value,
            DnsPolicy::SUPPORTED,
        )),
        _ => {}
    }

    let config_path = path.child("dnsConfig");
    match &spec.dns_config {
        None if spec.dns_policy == DnsPolicy::None => {
            errors.push(FieldError::required(
                &config_path,
                "must provide `dnsConfig` when `dnsPolicy` is None",
            ));
        }
        None => {}
        Some(config) => {
            let nameservers_path = config_path.child("nameservers");
            if spec.dns_policy == DnsPolicy::None && config.nameservers.is_empty() {
                errors.push(FieldError::required(
                    &nameservers_path,
                    "must provide at least one DNS nameserver when `dnsPolicy` is None",
                ));
            }
            if config.nameservers.len() > MAX_DNS_NAMESERVERS {
                errors.push(FieldError::invalid(
                    &nameservers_path,
                    &config.nameservers.join(","),
                    format!("must not have more than {} nameservers", MAX_DNS_NAMESERVERS),
                ));
            }
            for (i, nameserver) in config.nameservers.iter().enumerate() {
                if nameserver.parse::<IpAddr>().is_err() {
                    errors.push(FieldError::invalid(
                        &nameservers_path.index(i),
                        nameserver,
                        "must be valid IP address",
                    ));
                }
            }

            let searches_path = config_path.child("searches");
            if config.searches.len() > MAX_DNS_SEARCH_PATHS {
                errors.push(FieldError::invalid(
                    &searches_path,
                    &config.searches.join(","),
                    format!("must not have more than {} search paths", MAX_DNS_SEARCH_PATHS),
                ));
            }
            for (i, search) in config.searches.iter().enumerate() {
                push_invalid(
                    &mut errors,
                    &searches_path.index(i),
                    search,
                    is_dns1123_subdomain(search.trim_end_matches('.')),
                );
            }
        }
    }

    errors
}

/// With host networking the container port is the host port.
fn validate_host_network(spec: &PodSpec, path: &FieldPath) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let groups = [
        ("containers", &spec.containers),
        ("initContainers", &spec.init_containers),
    ];
    for (field, containers) in groups.iter() {
        for (i, container) in containers.iter().enumerate() {
            for (j, port) in container.ports.iter().enumerate() {
                if port.host_port != 0 && port.host_port != port.container_port {
                    errors.push(FieldError::invalid(
                        &path.child(field).index(i).child("ports").index(j).child("hostPort"),
                        &port.host_port.to_string(),
                        "must match `containerPort` when `hostNetwork` is true",
                    ));
                }
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use crate::models::field_error::ErrorKind;
    use crate::models::pod::{
        Container, ContainerPort, DnsPolicy, Pod, PodDnsConfig, Protocol, PullPolicy,
        RestartPolicy, TerminationMessagePolicy, Volume, VolumeMount,
    };
    use crate::models::quantity::Quantity;

    use super::{mask_trailing_dash, validate_pod_create};

    fn valid_container(name: &str) -> Container {
        Container {
            name: name.to_string(),
            image: "nginx:1.21".to_string(),
            termination_message_policy: TerminationMessagePolicy::FallbackToLogsOnError,
            image_pull_policy: PullPolicy::Always,
            ..Container::default()
        }
    }

    fn valid_pod() -> Pod {
        let mut pod = Pod::default();
        pod.metadata.name = "web".to_string();
        pod.metadata.namespace = "default".to_string();
        pod.spec.scheduler_name = "cluster-capacity".to_string();
        pod.spec.dns_policy = DnsPolicy::ClusterFirst;
        pod.spec.restart_policy = RestartPolicy::Always;
        pod.spec.containers = vec![valid_container("nginx")];
        pod
    }

    fn rendered(pod: &Pod) -> Vec<String> {
        validate_pod_create(pod)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn accepts_valid_pod() {
        assert!(validate_pod_create(&valid_pod()).is_empty());
    }

    #[test]
    fn collects_every_violation_in_order() {
        let mut pod = valid_pod();
        pod.metadata.name = String::new();
        pod.spec.containers[0].image = String::new();
        pod.spec.restart_policy = RestartPolicy::Unset;
        pod.spec.dns_policy = DnsPolicy::Unsupported("cluster-first".to_string());

        assert_eq!(
            rendered(&pod),
            vec![
                "Required value: metadata.name",
                "Required value: spec.containers[0].image",
                "Required value: spec.restartPolicy",
                "Unsupported value: spec.dnsPolicy",
            ]
        );
    }

    #[test]
    fn requires_at_least_one_container() {
        let mut pod = valid_pod();
        pod.spec.containers.clear();

        assert_eq!(rendered(&pod), vec!["Required value: spec.containers"]);
    }

    #[test]
    fn rejects_badly_named_pod() {
        let mut pod = valid_pod();
        pod.metadata.name = "Web_Server".to_string();
        pod.metadata.namespace = "Team.A".to_string();

        let errors = validate_pod_create(&pod);
        assert!(errors
            .iter()
            .all(|error| error.kind == ErrorKind::Invalid));
        assert!(errors.iter().any(|error| error.field == "metadata.name"));
        assert!(errors.iter().any(|error| error.field == "metadata.namespace"));
    }

    #[test]
    fn generate_name_does_not_stand_in_for_name() {
        let mut pod = valid_pod();
        pod.metadata.name = String::new();
        pod.metadata.generate_name = "web-".to_string();

        assert_eq!(rendered(&pod), vec!["Required value: metadata.name"]);
    }

    #[test]
    fn checks_generate_name_prefix() {
        let mut pod = valid_pod();
        pod.metadata.generate_name = "web--".to_string();
        assert!(validate_pod_create(&pod).is_empty());

        pod.metadata.generate_name = "-".to_string();
        assert_eq!(rendered(&pod), vec!["Invalid value: metadata.generateName"]);

        pod.metadata.generate_name = "Web-".to_string();
        assert_eq!(rendered(&pod), vec!["Invalid value: metadata.generateName"]);
    }

    #[test]
    fn can_mask_trailing_dash() {
        assert_eq!(mask_trailing_dash("web-"), "weba");
        assert_eq!(mask_trailing_dash("web--"), "web-a");
        assert_eq!(mask_trailing_dash("-"), "-");
        assert_eq!(mask_trailing_dash("web"), "web");
    }

    #[test]
    fn rejects_duplicate_container_names_across_init_containers() {
        let mut pod = valid_pod();
        pod.spec.init_containers = vec![valid_container("nginx")];

        assert_eq!(rendered(&pod), vec!["Duplicate value: spec.initContainers[0].name"]);
    }

    #[test]
    fn requires_container_policies() {
        let mut pod = valid_pod();
        pod.spec.containers[0].image_pull_policy = PullPolicy::Unset;
        pod.spec.containers[0].termination_message_policy =
            TerminationMessagePolicy::Unsupported("Logs".to_string());

        assert_eq!(
            rendered(&pod),
            vec![
                "Unsupported value: spec.containers[0].terminationMessagePolicy",
                "Required value: spec.containers[0].imagePullPolicy",
            ]
        );
    }

    #[test]
    fn rejects_request_above_limit() {
        let mut pod = valid_pod();
        let resources = &mut pod.spec.containers[0].resources;
        resources.limits.insert("cpu".to_string(), Quantity::parse("500m").unwrap());
        resources.requests.insert("cpu".to_string(), Quantity::parse("1").unwrap());
        resources.requests.insert("memory".to_string(), Quantity::parse("64Mi").unwrap());

        assert_eq!(
            rendered(&pod),
            vec!["Invalid value: spec.containers[0].resources.requests[cpu]"]
        );
    }

    #[test]
    fn rejects_negative_and_unknown_resources() {
        let mut pod = valid_pod();
        let resources = &mut pod.spec.containers[0].resources;
        resources.requests.insert("memory".to_string(), Quantity::parse("-1Gi").unwrap());
        resources.requests.insert("gpu".to_string(), Quantity::parse("1").unwrap());
        resources
            .requests
            .insert("example.com/dongle".to_string(), Quantity::parse("1").unwrap());

        assert_eq!(
            rendered(&pod),
            vec![
                "Invalid value: spec.containers[0].resources.requests[gpu]",
                "Invalid value: spec.containers[0].resources.requests[memory]",
            ]
        );
    }

    #[test]
    fn validates_ports() {
        let mut pod = valid_pod();
        pod.spec.containers[0].ports = vec![
            ContainerPort {
                name: "http".to_string(),
                container_port: 80,
                protocol: Protocol::Tcp,
                ..ContainerPort::default()
            },
            ContainerPort {
                name: "http".to_string(),
                container_port: 70000,
                protocol: Protocol::Unset,
                ..ContainerPort::default()
            },
        ];

        assert_eq!(
            rendered(&pod),
            vec![
                "Duplicate value: spec.containers[0].ports[1].name",
                "Invalid value: spec.containers[0].ports[1].containerPort",
                "Required value: spec.containers[0].ports[1].protocol",
            ]
        );
    }

    #[test]
    fn volume_mounts_must_reference_volumes() {
        let mut pod = valid_pod();
        pod.spec.volumes = vec![Volume {
            name: "data".to_string(),
        }];
        pod.spec.containers[0].volume_mounts = vec![
            VolumeMount {
                name: "data".to_string(),
                mount_path: "/data".to_string(),
                ..VolumeMount::default()
            },
            VolumeMount {
                name: "cache".to_string(),
                mount_path: String::new(),
                ..VolumeMount::default()
            },
        ];

        assert_eq!(
            rendered(&pod),
            vec![
                "Not found: spec.containers[0].volumeMounts[1].name",
                "Required value: spec.containers[0].volumeMounts[1].mountPath",
            ]
        );
    }

    #[test]
    fn dns_policy_none_requires_nameservers() {
        let mut pod = valid_pod();
        pod.spec.dns_policy = DnsPolicy::None;

        assert_eq!(rendered(&pod), vec!["Required value: spec.dnsConfig"]);

        pod.spec.dns_config = Some(PodDnsConfig {
            nameservers: vec!["not-an-ip".to_string()],
            searches: vec![],
        });
        assert_eq!(rendered(&pod), vec!["Invalid value: spec.dnsConfig.nameservers[0]"]);

        pod.spec.dns_config = Some(PodDnsConfig {
            nameservers: vec!["10.0.0.10".to_string()],
            searches: vec!["svc.cluster.local".to_string()],
        });
        assert!(validate_pod_create(&pod).is_empty());
    }

    #[test]
    fn validates_node_selector_and_deadlines() {
        let mut pod = valid_pod();
        pod.spec
            .node_selector
            .insert("disk type".to_string(), "ssd".to_string());
        pod.spec.active_deadline_seconds = Some(0);
        pod.spec.termination_grace_period_seconds = Some(30);

        assert_eq!(
            rendered(&pod),
            vec![
                "Invalid value: spec.nodeSelector",
                "Invalid value: spec.activeDeadlineSeconds",
            ]
        );
    }

    #[test]
    fn host_network_pins_host_port() {
        let mut pod = valid_pod();
        pod.spec.host_network = true;
        pod.spec.containers[0].ports = vec![ContainerPort {
            container_port: 8080,
            host_port: 80,
            protocol: Protocol::Tcp,
            ..ContainerPort::default()
        }];

        assert_eq!(
            rendered(&pod),
            vec!["Invalid value: spec.containers[0].ports[0].hostPort"]
        );
    }

    #[test]
    fn forbids_ephemeral_containers_on_create() {
        let mut pod = valid_pod();
        pod.spec.ephemeral_containers = vec!["debugger".to_string()];

        assert_eq!(rendered(&pod), vec!["Forbidden: spec.ephemeralContainers"]);
    }
}
