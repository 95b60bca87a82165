use k8s_openapi::api::core::v1 as versioned;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity as VersionedQuantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as versioned_meta;
use std::collections::BTreeMap;

use crate::models::field_error::FieldPath;
use crate::models::pod::{
    Container, ContainerPort, ObjectMeta, Pod, PodDnsConfig, PodSpec, ResourceRequirements,
    Volume, VolumeMount,
};
use crate::models::quantity::Quantity;
use crate::utils::error::Error;

/// `namespace/name` of a versioned pod, for error messages.
pub fn versioned_key(pod: &versioned::Pod) -> String {
    let metadata = &pod.metadata;
    let name = match metadata.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => metadata.generate_name.as_deref().unwrap_or(""),
    };
    format!("{}/{}", metadata.namespace.as_deref().unwrap_or(""), name)
}

/// Maps a versioned pod onto the internal representation. Status and other
/// server populated fields are dropped; the source pod is left untouched.
///
/// Fails only when a field has no internal equivalent: a missing spec or a
/// resource quantity that does not parse.
pub fn convert_pod(pod: &versioned::Pod) -> Result<Pod, Error> {
    let conversion_error = |reason: String| Error::ConversionError {
        pod: versioned_key(pod),
        reason,
    };

    let spec = pod
        .spec
        .as_ref()
        .ok_or_else(|| conversion_error("spec: Required value".to_owned()))?;

    let spec_path = FieldPath::new("spec");
    let containers = convert_containers(&spec.containers, &spec_path.child("containers"))
        .map_err(&conversion_error)?;
    let init_containers = convert_containers(
        spec.init_containers.as_deref().unwrap_or_default(),
        &spec_path.child("initContainers"),
    )
    .map_err(&conversion_error)?;

    Ok(Pod {
        metadata: convert_metadata(&pod.metadata),
        spec: PodSpec {
            volumes: spec
                .volumes
                .iter()
                .flatten()
                .map(|volume| Volume {
                    name: volume.name.clone(),
                })
                .collect(),
            init_containers,
            containers,
            ephemeral_containers: spec
                .ephemeral_containers
                .iter()
                .flatten()
                .map(|container| container.name.clone())
                .collect(),
            restart_policy: spec.restart_policy.as_deref().into(),
            termination_grace_period_seconds: spec.termination_grace_period_seconds,
            active_deadline_seconds: spec.active_deadline_seconds,
            dns_policy: spec.dns_policy.as_deref().into(),
            dns_config: spec.dns_config.as_ref().map(|dns_config| PodDnsConfig {
                nameservers: dns_config.nameservers.clone().unwrap_or_default(),
                searches: dns_config.searches.clone().unwrap_or_default(),
            }),
            node_selector: spec.node_selector.clone().unwrap_or_default(),
            service_account_name: string_or_empty(&spec.service_account_name),
            node_name: string_or_empty(&spec.node_name),
            host_network: spec.host_network.unwrap_or(false),
            scheduler_name: string_or_empty(&spec.scheduler_name),
            priority_class_name: string_or_empty(&spec.priority_class_name),
            priority: spec.priority,
        },
    })
}

fn convert_metadata(metadata: &versioned_meta::ObjectMeta) -> ObjectMeta {
    ObjectMeta {
        name: string_or_empty(&metadata.name),
        generate_name: string_or_empty(&metadata.generate_name),
        namespace: string_or_empty(&metadata.namespace),
        labels: metadata.labels.clone().unwrap_or_default(),
        annotations: metadata.annotations.clone().unwrap_or_default(),
    }
}

fn convert_containers(
    containers: &[versioned::Container],
    path: &FieldPath,
) -> Result<Vec<Container>, String> {
    containers
        .iter()
        .enumerate()
        .map(|(i, container)| convert_container(container, &path.index(i)))
        .collect()
}

fn convert_container(container: &versioned::Container, path: &FieldPath) -> Result<Container, String> {
    let resources_path = path.child("resources");
    let resources = match &container.resources {
        Some(resources) => ResourceRequirements {
            limits: convert_resource_list(&resources.limits, &resources_path.child("limits"))?,
            requests: convert_resource_list(&resources.requests, &resources_path.child("requests"))?,
        },
        None => ResourceRequirements::default(),
    };

    Ok(Container {
        name: container.name.clone(),
        image: string_or_empty(&container.image),
        command: container.command.clone().unwrap_or_default(),
        args: container.args.clone().unwrap_or_default(),
        ports: container
            .ports
            .iter()
            .flatten()
            .map(|port| ContainerPort {
                name: string_or_empty(&port.name),
                host_port: port.host_port.unwrap_or(0),
                container_port: port.container_port,
                protocol: port.protocol.as_deref().into(),
                host_ip: string_or_empty(&port.host_ip),
            })
            .collect(),
        resources,
        volume_mounts: container
            .volume_mounts
            .iter()
            .flatten()
            .map(|mount| VolumeMount {
                name: mount.name.clone(),
                mount_path: mount.mount_path.clone(),
                read_only: mount.read_only.unwrap_or(false),
                sub_path: string_or_empty(&mount.sub_path),
            })
            .collect(),
        termination_message_path: string_or_empty(&container.termination_message_path),
        termination_message_policy: container.termination_message_policy.as_deref().into(),
        image_pull_policy: container.image_pull_policy.as_deref().into(),
    })
}

fn convert_resource_list(
    list: &Option<BTreeMap<String, VersionedQuantity>>,
    path: &FieldPath,
) -> Result<BTreeMap<String, Quantity>, String> {
    list.iter()
        .flatten()
        .map(|(name, quantity)| {
            Quantity::parse(&quantity.0)
                .map(|parsed| (name.clone(), parsed))
                .map_err(|err| format!("{}: {}", path.key(name), err))
        })
        .collect()
}

fn string_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
