//! Internal pod representation handed to the simulator.
//!
//! Unlike the versioned `core/v1` types, optional strings are flattened to
//! empty strings, absent lists to empty lists, and enumerated policy fields are
//! typed. Values outside an enumeration survive as `Unsupported` so validation
//! can report them instead of losing them.

use std::collections::BTreeMap;
use std::fmt;

use super::quantity::Quantity;

macro_rules! policy_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
            /// The field was left empty.
            Unset,
            /// A value outside the enumeration, kept verbatim.
            Unsupported(String),
        }

        impl $name {
            pub const SUPPORTED: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unset => "",
                    $name::Unsupported(value) => value,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Unset
            }
        }

        impl From<Option<&str>> for $name {
            fn from(value: Option<&str>) -> Self {
                match value.unwrap_or("") {
                    "" => $name::Unset,
                    $($value => $name::$variant,)+
                    other => $name::Unsupported(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

policy_enum!(
    /// How a pod resolves names.
    DnsPolicy {
        ClusterFirstWithHostNet => "ClusterFirstWithHostNet",
        ClusterFirst => "ClusterFirst",
        Default => "Default",
        None => "None",
    }
);

policy_enum!(
    RestartPolicy {
        Always => "Always",
        OnFailure => "OnFailure",
        Never => "Never",
    }
);

policy_enum!(
    PullPolicy {
        Always => "Always",
        IfNotPresent => "IfNotPresent",
        Never => "Never",
    }
);

policy_enum!(
    /// Where the kubelet reads a container's termination message from.
    TerminationMessagePolicy {
        File => "File",
        FallbackToLogsOnError => "FallbackToLogsOnError",
    }
);

policy_enum!(
    Protocol {
        Tcp => "TCP",
        Udp => "UDP",
        Sctp => "SCTP",
    }
);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMeta {
    pub name: String,
    pub generate_name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pod {
    pub metadata: ObjectMeta,
    pub spec: PodSpec,
}

impl Pod {
    /// `namespace/name`, falling back to the generate-name prefix for unnamed pods.
    pub fn key(&self) -> String {
        let name = if self.metadata.name.is_empty() {
            &self.metadata.generate_name
        } else {
            &self.metadata.name
        };
        format!("{}/{}", self.metadata.namespace, name)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PodSpec {
    pub volumes: Vec<Volume>,
    pub init_containers: Vec<Container>,
    pub containers: Vec<Container>,
    /// Names only; ephemeral containers can not be set when a pod is created.
    pub ephemeral_containers: Vec<String>,
    pub restart_policy: RestartPolicy,
    pub termination_grace_period_seconds: Option<i64>,
    pub active_deadline_seconds: Option<i64>,
    pub dns_policy: DnsPolicy,
    pub dns_config: Option<PodDnsConfig>,
    pub node_selector: BTreeMap<String, String>,
    pub service_account_name: String,
    pub node_name: String,
    pub host_network: bool,
    pub scheduler_name: String,
    pub priority_class_name: String,
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PodDnsConfig {
    pub nameservers: Vec<String>,
    pub searches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Volume {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub name: String,
    pub image: String,
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub ports: Vec<ContainerPort>,
    pub resources: ResourceRequirements,
    pub volume_mounts: Vec<VolumeMount>,
    pub termination_message_path: String,
    pub termination_message_policy: TerminationMessagePolicy,
    pub image_pull_policy: PullPolicy,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerPort {
    pub name: String,
    /// Zero when not exposed on the host.
    pub host_port: i32,
    pub container_port: i32,
    pub protocol: Protocol,
    pub host_ip: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceRequirements {
    pub limits: BTreeMap<String, Quantity>,
    pub requests: BTreeMap<String, Quantity>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
    pub read_only: bool,
    pub sub_path: String,
}
