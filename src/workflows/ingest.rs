use k8s_openapi::api::core::v1 as versioned;
use log::{debug, info, warn};

use crate::admission::{convert_pod, set_defaults, validate_pod_create};
use crate::codec;
use crate::models::field_error::{InvalidPod, ValidationErrors};
use crate::models::options::{ClusterCapacityConfig, SpecSource};
use crate::models::pod::Pod;
use crate::models::pod_list::PodList;
use crate::sources::{DefaultResolver, SourceResolver};
use crate::utils::error::Error;

/// Reads, defaults, converts and validates the pods of one run.
///
/// All or nothing: either every pod is valid and the whole list is returned in
/// document order, or an error describes what went wrong.
///
/// # Arguments
/// - `resolver`: opens the spec location. Only the selected location is ever opened.
/// - `source`: which spec to read and whether it holds one pod or a list.
/// - `scheduler_name`: scheduler given to pods that name none.
pub fn ingest(
    resolver: &dyn SourceResolver,
    source: &SpecSource,
    scheduler_name: &str,
) -> Result<Vec<Pod>, Error> {
    let versioned_pods = decode_source(resolver, source)?;
    debug!("decoded {} pod(s) from {}", versioned_pods.len(), source.location());

    let mut pods = Vec::with_capacity(versioned_pods.len());
    let mut invalid_pods = Vec::new();

    for mut versioned_pod in versioned_pods {
        set_defaults(&mut versioned_pod, scheduler_name);

        let pod = convert_pod(&versioned_pod)?;
        let errors = validate_pod_create(&pod);
        if !errors.is_empty() {
            debug!("pod {} has {} violation(s)", pod.key(), errors.len());
            invalid_pods.push(InvalidPod {
                pod: pod.key(),
                errors,
            });
        }
        pods.push(pod);
    }

    if !invalid_pods.is_empty() {
        let errors = ValidationErrors(invalid_pods);
        debug!(
            "rejecting {} pod(s) with {} violation(s)",
            errors.pods().len(),
            errors.field_errors().count()
        );
        return Err(Error::ValidationError(errors));
    }

    Ok(pods)
}

fn decode_source(
    resolver: &dyn SourceResolver,
    source: &SpecSource,
) -> Result<Vec<versioned::Pod>, Error> {
    let location = source.location();
    let reader = resolver.open(location)?;
    let document = codec::read_document(reader).map_err(|err| Error::ReadError {
        location: location.to_string(),
        source: err,
    })?;

    let pods = match source {
        SpecSource::Single(_) => {
            let pod: versioned::Pod = codec::decode(&document)?;
            PodList::from(pod).items
        }
        SpecSource::List(_) => {
            let list: PodList = codec::decode(&document)?;
            list.items
        }
    };

    codec::check_quantities(&pods)?;
    Ok(pods)
}

impl ClusterCapacityConfig {
    /// Ingests the pods named by the options into `self.pods`. On failure
    /// `self.pods` is left as it was.
    pub fn parse_api_spec(&mut self, scheduler_name: &str) -> Result<(), Error> {
        self.options.validate()?;
        let source = self.options.spec_source()?;
        let resolver = DefaultResolver::new(self.options.fetch_timeout())?;

        self.parse_api_spec_with(&resolver, &source, scheduler_name)
    }

    pub fn parse_api_spec_with(
        &mut self,
        resolver: &dyn SourceResolver,
        source: &SpecSource,
        scheduler_name: &str,
    ) -> Result<(), Error> {
        let pods = ingest(resolver, source, scheduler_name).map_err(|err| {
            if err.is_source_resolution() {
                warn!("pod spec source {} could not be read", source.location());
            }
            err
        })?;
        info!("ingested {} pod(s) from {}", pods.len(), source.location());
        self.pods = pods;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::{Cursor, Read, Write};
    use tempfile::NamedTempFile;

    use super::ingest;
    use crate::models::field_error::ErrorKind;
    use crate::models::options::{ClusterCapacityConfig, ClusterCapacityOptions, SpecSource};
    use crate::models::pod::{DnsPolicy, RestartPolicy, TerminationMessagePolicy};
    use crate::sources::SourceResolver;
    use crate::utils::error::Error;

    const SCHEDULER_NAME: &str = "cluster-capacity-scheduler";

    /// Serves documents from memory and records every location opened.
    #[derive(Default)]
    struct FakeResolver {
        documents: HashMap<String, String>,
        opened: RefCell<Vec<String>>,
    }

    impl FakeResolver {
        fn with(mut self, location: &str, document: &str) -> Self {
            self.documents.insert(location.to_string(), document.to_string());
            self
        }
    }

    impl SourceResolver for FakeResolver {
        fn open(&self, location: &str) -> Result<Box<dyn Read>, Error> {
            self.opened.borrow_mut().push(location.to_string());
            match self.documents.get(location) {
                Some(document) => Ok(Box::new(Cursor::new(document.clone().into_bytes()))),
                None => Err(Error::UserInputError(format!("{} must not be opened", location))),
            }
        }
    }

    fn pod_yaml(name: &str) -> String {
        format!(
            r#"apiVersion: v1
kind: Pod
metadata:
  name: {}
spec:
  containers:
  - name: app
    image: nginx
    imagePullPolicy: Always
"#,
            name
        )
    }

    fn list_yaml(pods: &[String]) -> String {
        let items: Vec<String> = pods
            .iter()
            .map(|pod| {
                let mut lines = pod.lines();
                let first = format!("- {}\n", lines.next().unwrap_or_default());
                let rest: String = lines.map(|line| format!("  {}\n", line)).collect();
                first + &rest
            })
            .collect();
        format!("apiVersion: v1\nkind: PodList\nitems:\n{}", items.concat())
    }

    #[test]
    fn can_default_minimal_pod() {
        let document = r#"{
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "small-pod"},
            "spec": {"containers": [{"name": "app", "image": "nginx", "imagePullPolicy": "Always"}]}
        }"#;
        let resolver = FakeResolver::default().with("pod.json", document);

        let pods = ingest(&resolver, &SpecSource::Single("pod.json".to_string()), SCHEDULER_NAME).unwrap();

        assert_eq!(pods.len(), 1);
        let pod = &pods[0];
        assert_eq!(pod.metadata.namespace, "default");
        assert_eq!(pod.spec.scheduler_name, SCHEDULER_NAME);
        assert_eq!(pod.spec.dns_policy, DnsPolicy::ClusterFirst);
        assert_eq!(pod.spec.restart_policy, RestartPolicy::Always);
        assert_eq!(
            pod.spec.containers[0].termination_message_policy,
            TerminationMessagePolicy::FallbackToLogsOnError
        );
    }

    #[test]
    fn preserves_list_order() {
        let document = list_yaml(&[pod_yaml("a"), pod_yaml("c"), pod_yaml("b")]);
        let resolver = FakeResolver::default().with("pods.yaml", &document);

        let pods = ingest(&resolver, &SpecSource::List("pods.yaml".to_string()), SCHEDULER_NAME).unwrap();
        let names: Vec<&str> = pods.iter().map(|pod| pod.metadata.name.as_str()).collect();

        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn single_spec_never_reads_list_spec() {
        let options = ClusterCapacityOptions {
            pod_spec_file: "pod.yaml".to_string(),
            pod_list_spec_file: "pods.yaml".to_string(),
            ..ClusterCapacityOptions::default()
        };
        let resolver = FakeResolver::default().with("pod.yaml", &pod_yaml("single"));

        let source = options.spec_source().unwrap();
        let pods = ingest(&resolver, &source, SCHEDULER_NAME).unwrap();

        assert_eq!(pods.len(), 1);
        assert_eq!(pods[0].metadata.name, "single");
        assert_eq!(*resolver.opened.borrow(), vec!["pod.yaml".to_string()]);

        let alone = ingest(&resolver, &SpecSource::Single("pod.yaml".to_string()), SCHEDULER_NAME).unwrap();
        assert_eq!(pods, alone);
    }

    #[test]
    fn one_invalid_pod_rejects_the_whole_list() {
        let broken = pod_yaml("b").replace("imagePullPolicy: Always", "imagePullPolicy: Sometimes");
        let document = list_yaml(&[pod_yaml("a"), broken, pod_yaml("c")]);
        let resolver = FakeResolver::default().with("pods.yaml", &document);

        let err = ingest(&resolver, &SpecSource::List("pods.yaml".to_string()), SCHEDULER_NAME)
            .err()
            .unwrap();

        match &err {
            Error::ValidationError(errors) => {
                assert_eq!(errors.pods().len(), 1);
                assert_eq!(errors.pods()[0].pod, "default/b");
                assert_eq!(errors.pods()[0].errors[0].kind, ErrorKind::NotSupported);
                assert_eq!(errors.pods()[0].errors[0].field, "spec.containers[0].imagePullPolicy");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "invalid pod \"default/b\": Unsupported value: spec.containers[0].imagePullPolicy"
        );
    }

    #[test]
    fn reports_violations_of_every_pod() {
        let first = pod_yaml("a").replace("image: nginx", "image: \"\"");
        let second = pod_yaml("B");
        let document = list_yaml(&[first, second]);
        let resolver = FakeResolver::default().with("pods.yaml", &document);

        let err = ingest(&resolver, &SpecSource::List("pods.yaml".to_string()), SCHEDULER_NAME)
            .err()
            .unwrap();

        assert_eq!(
            err.to_string(),
            "invalid pod \"default/a\": Required value: spec.containers[0].image\n\
             invalid pod \"default/B\": Invalid value: metadata.name"
        );
    }

    #[test]
    fn resolution_errors_are_returned_as_is() {
        let resolver = FakeResolver::default();

        let err = ingest(&resolver, &SpecSource::Single("missing.yaml".to_string()), SCHEDULER_NAME)
            .err()
            .unwrap();

        assert!(matches!(err, Error::UserInputError(_)));
    }

    #[test]
    fn decode_errors_stop_ingestion() {
        let resolver = FakeResolver::default().with("pod.json", "{\"metadata\": {\"name\": 42}}");

        let err = ingest(&resolver, &SpecSource::Single("pod.json".to_string()), SCHEDULER_NAME)
            .err()
            .unwrap();

        assert!(matches!(err, Error::DecodeError(_)));
        assert!(err.to_string().starts_with("failed to decode config file: "));
    }

    #[test]
    fn bad_quantities_fail_the_document() {
        let greedy = pod_yaml("b").replace(
            "    imagePullPolicy: Always\n",
            "    imagePullPolicy: Always\n    resources:\n      requests:\n        cpu: lots\n",
        );
        let document = list_yaml(&[pod_yaml("A"), greedy]);
        let resolver = FakeResolver::default().with("pods.yaml", &document);

        let err = ingest(&resolver, &SpecSource::List("pods.yaml".to_string()), SCHEDULER_NAME)
            .err()
            .unwrap();

        assert!(matches!(err, Error::DecodeError(_)));
        assert!(err
            .to_string()
            .starts_with("failed to decode config file: quantities must match"));
    }

    #[test]
    fn generate_name_alone_is_rejected() {
        let document = pod_yaml("web").replace("  name: web\n", "  generateName: web-\n");
        let resolver = FakeResolver::default().with("pod.yaml", &document);

        let err = ingest(&resolver, &SpecSource::Single("pod.yaml".to_string()), SCHEDULER_NAME)
            .err()
            .unwrap();

        assert_eq!(
            err.to_string(),
            "invalid pod \"default/web-\": Required value: metadata.name"
        );
    }

    #[test]
    fn can_parse_api_spec_from_file() {
        let mut spec = NamedTempFile::new().unwrap();
        write!(spec, "{}", list_yaml(&[pod_yaml("a"), pod_yaml("b")])).unwrap();

        let mut config = ClusterCapacityConfig::new(ClusterCapacityOptions {
            pod_list_spec_file: spec.path().to_str().unwrap().to_string(),
            ..ClusterCapacityOptions::default()
        });
        config.parse_api_spec(SCHEDULER_NAME).unwrap();

        assert_eq!(config.pods.len(), 2);
        assert_eq!(config.pods[1].metadata.name, "b");
    }

    #[test]
    fn can_parse_api_spec_from_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/pod.yaml")
            .with_status(200)
            .with_body(pod_yaml("remote"))
            .expect(1)
            .create();

        let mut config = ClusterCapacityConfig::new(ClusterCapacityOptions {
            pod_spec_file: format!("{}/pod.yaml", server.url()),
            ..ClusterCapacityOptions::default()
        });
        config.parse_api_spec(SCHEDULER_NAME).unwrap();

        assert_eq!(config.pods[0].key(), "default/remote");
        mock.assert();
    }

    #[test]
    fn failed_parse_leaves_pods_untouched() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/pods.yaml").with_status(404).expect(1).create();

        let url = format!("{}/pods.yaml", server.url());
        let mut config = ClusterCapacityConfig::new(ClusterCapacityOptions {
            pod_list_spec_file: url.clone(),
            ..ClusterCapacityOptions::default()
        });
        let err = config.parse_api_spec(SCHEDULER_NAME).err().unwrap();

        assert!(err.is_source_resolution());
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains(&url));
        assert!(config.pods.is_empty());
        mock.assert();
    }
}
