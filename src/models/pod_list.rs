use k8s_openapi::api::core::v1::Pod;
use serde::Deserialize;

/// A versioned pod list document.
///
/// Only `items` is read: `apiVersion`, `kind` and list metadata are ignored, so
/// a `kind: List` document decodes just as well as a `kind: PodList` one.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PodList {
    #[serde(default)]
    pub items: Vec<Pod>,
}

impl From<Pod> for PodList {
    fn from(pod: Pod) -> Self {
        PodList { items: vec![pod] }
    }
}
