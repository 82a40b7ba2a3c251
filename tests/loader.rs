use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use controller_configfile::configuration::{
    ConfigurationError,
    ConfigurationFsLoader,
    ControllerConfiguration,
};

const EXPECTED_FILENAME: &str = "/path/to/config/file";

const FULL_DOCUMENT: &str = "\
apiVersion: controller.config.cert-manager.io/v1alpha1
kind: ControllerConfiguration
apiServerHost: test-api-server-host
kubeConfig: test-kube-config
kubernetesAPIQPS: 123.456
kubernetesAPIBurst: 123456
namespace: test-namespace
clusterResourceNamespace: test-cluster-resource-namespace
leaderElectionConfig:
  enabled: true
  namespace: test-leader-election-namespace
  leaseDuration: 123456s
  renewDeadline: 123456s
  retryPeriod: 123456s
  healthzTimeout: 123456s
acmeHTTP01Config:
  solverImage: helloz
";


/// Returns a read function that serves `contents` for [`EXPECTED_FILENAME`]
/// and fails the test for any other filename.
fn serve(contents: String) -> impl Fn(&Path) -> io::Result<Vec<u8>> {
    move |filename: &Path| {
        assert_eq!(
            filename,
            Path::new(EXPECTED_FILENAME),
            "unexpected filename passed to the read function"
        );

        Ok(contents.clone().into_bytes())
    }
}

fn load(contents: &str) -> Result<ControllerConfiguration, ConfigurationError> {
    let loader = ConfigurationFsLoader::new(serve(contents.to_string()), EXPECTED_FILENAME)?;

    let mut configuration = ControllerConfiguration::new();
    loader.load(&mut configuration)?;

    Ok(configuration)
}


#[test]
fn minimal_document_resolves_relative_kube_config() {
    let configuration = load(
        "apiVersion: controller.config.cert-manager.io/v1alpha1
kind: ControllerConfiguration
kubeConfig: path/to/kubeconfig/file",
    )
    .unwrap();

    assert_eq!(
        configuration.kube_config,
        "/path/to/config/path/to/kubeconfig/file"
    );
}

#[test]
fn full_document_is_decoded_verbatim() {
    let configuration = load(FULL_DOCUMENT).unwrap();
    let long_duration = Duration::from_secs(123_456);

    assert_eq!(configuration.api_server_host, "test-api-server-host");
    assert_eq!(configuration.kube_config, "/path/to/config/test-kube-config");
    assert_eq!(configuration.kubernetes_api_qps, 123.456);
    assert_eq!(configuration.kubernetes_api_burst, 123_456);
    assert_eq!(configuration.namespace, "test-namespace");
    assert_eq!(
        configuration.cluster_resource_namespace,
        "test-cluster-resource-namespace"
    );

    assert!(configuration.leader_election.enabled);
    assert_eq!(
        configuration.leader_election.namespace,
        "test-leader-election-namespace"
    );
    assert_eq!(configuration.leader_election.lease_duration, long_duration);
    assert_eq!(configuration.leader_election.renew_deadline, long_duration);
    assert_eq!(configuration.leader_election.retry_period, long_duration);
    assert_eq!(configuration.leader_election.healthz_timeout, long_duration);

    assert_eq!(configuration.acme_http01.solver_image, "helloz");
    // Siblings of an explicitly set field keep their defaults.
    assert_eq!(configuration.acme_http01.solver_resource_request_cpu, "10m");
}

#[test]
fn read_failure_leaves_target_untouched() {
    let loader = ConfigurationFsLoader::new(
        |filename: &Path| {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file {}", filename.display()),
            ))
        },
        EXPECTED_FILENAME,
    )
    .unwrap();

    let mut configuration = ControllerConfiguration::new();
    let error = loader.load(&mut configuration).unwrap_err();

    match error {
        ConfigurationError::ReadFailure { path, source } => {
            assert_eq!(path, PathBuf::from(EXPECTED_FILENAME));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected a read failure, got {other:?}"),
    }

    assert_eq!(configuration, ControllerConfiguration::new());
}

#[test]
fn absolute_paths_are_left_unchanged() {
    let configuration = load(
        "apiVersion: controller.config.cert-manager.io/v1alpha1
kind: ControllerConfiguration
kubeConfig: /etc/kubernetes/../kubernetes/admin.conf
metricsTLSConfig:
  filesystem:
    certFile: /tls/tls.crt
    keyFile: ./tls.key
",
    )
    .unwrap();

    assert_eq!(
        configuration.kube_config,
        "/etc/kubernetes/../kubernetes/admin.conf"
    );
    assert_eq!(configuration.metrics_tls.filesystem.cert_file, "/tls/tls.crt");
    assert_eq!(
        configuration.metrics_tls.filesystem.key_file,
        "/path/to/config/tls.key"
    );
}

#[test]
fn empty_paths_stay_empty() {
    let configuration = load(
        "apiVersion: controller.config.cert-manager.io/v1alpha1
kind: ControllerConfiguration
",
    )
    .unwrap();

    assert!(configuration.kube_config.is_empty());
    assert!(configuration.metrics_tls.filesystem.cert_file.is_empty());
    assert!(configuration.metrics_tls.filesystem.key_file.is_empty());
}

#[test]
fn null_and_empty_paths_stay_empty() {
    for path_fields in [
        "kubeConfig: null\nmetricsTLSConfig:\n  filesystem:\n    certFile: null\n    keyFile: ~\n",
        "kubeConfig:\nmetricsTLSConfig:\n  filesystem:\n    certFile:\n    keyFile:\n",
        "kubeConfig: ''\nmetricsTLSConfig:\n  filesystem: null\n",
    ] {
        let configuration = load(&format!(
            "apiVersion: controller.config.cert-manager.io/v1alpha1
kind: ControllerConfiguration
{path_fields}"
        ))
        .unwrap();

        assert!(
            configuration.kube_config.is_empty(),
            "kubeConfig became {:?} for {path_fields:?}",
            configuration.kube_config
        );
        assert!(configuration.metrics_tls.filesystem.cert_file.is_empty());
        assert!(configuration.metrics_tls.filesystem.key_file.is_empty());
    }
}

#[test]
fn null_values_keep_their_defaults_after_load() {
    let configuration = load(
        "apiVersion: controller.config.cert-manager.io/v1alpha1
kind: ControllerConfiguration
clusterResourceNamespace: null
controllers:
acmeHTTP01Config:
  solverImage:
leaderElectionConfig:
  leaseDuration:
",
    )
    .unwrap();

    assert_eq!(configuration.cluster_resource_namespace, "kube-system");
    assert_eq!(configuration.controllers, vec!["*".to_string()]);
    assert_eq!(
        configuration.acme_http01.solver_image,
        "quay.io/jetstack/cert-manager-acmesolver:canary"
    );
    assert_eq!(
        configuration.leader_election.lease_duration,
        Duration::from_secs(60)
    );
}

#[test]
fn repeated_loads_are_idempotent() {
    let loader = ConfigurationFsLoader::new(serve(FULL_DOCUMENT.to_string()), EXPECTED_FILENAME)
        .unwrap();

    let mut first = ControllerConfiguration::new();
    loader.load(&mut first).unwrap();

    let mut second = first.clone();
    loader.load(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn decoder_errors_are_surfaced_unchanged() {
    assert!(matches!(
        load("apiVersion: controller.config.cert-manager.io/v1alpha1\nkind: WebhookConfiguration\n"),
        Err(ConfigurationError::UnexpectedKind { .. })
    ));
    assert!(matches!(
        load("apiVersion: controller.config.cert-manager.io/v1beta1\nkind: ControllerConfiguration\n"),
        Err(ConfigurationError::UnsupportedApiVersion { .. })
    ));
    assert!(matches!(
        load("apiVersion: controller.config.cert-manager.io/v1alpha1\nkind: ControllerConfiguration\nkubernetesAPIQPS: lots\n"),
        Err(ConfigurationError::MalformedDocument { .. })
    ));
}

#[test]
fn loads_from_the_filesystem() {
    let directory = tempfile::tempdir().unwrap();
    let configuration_path = directory.path().join("controller.yaml");

    fs::write(
        &configuration_path,
        "apiVersion: controller.config.cert-manager.io/v1alpha1
kind: ControllerConfiguration
kubeConfig: ../kube/config
namespace: from-disk
",
    )
    .unwrap();

    let loader = ConfigurationFsLoader::from_filesystem(&configuration_path).unwrap();
    let mut configuration = ControllerConfiguration::new();
    loader.load(&mut configuration).unwrap();

    let parent_of_directory = directory.path().parent().unwrap();
    assert_eq!(configuration.namespace, "from-disk");
    assert_eq!(
        PathBuf::from(&configuration.kube_config),
        parent_of_directory.join("kube").join("config")
    );
}

#[test]
fn missing_file_on_filesystem_is_a_read_failure() {
    let directory = tempfile::tempdir().unwrap();

    let loader =
        ConfigurationFsLoader::from_filesystem(directory.path().join("does-not-exist.yaml"))
            .unwrap();

    assert!(matches!(
        loader.load(&mut ControllerConfiguration::new()),
        Err(ConfigurationError::ReadFailure { .. })
    ));
}
