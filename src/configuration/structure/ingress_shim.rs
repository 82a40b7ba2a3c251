/// Defaults used when certificates are requested through ingress annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngressShimConfiguration {
    pub default_issuer_name: String,

    pub default_issuer_kind: String,

    pub default_issuer_group: String,

    /// Annotations that trigger certificate creation when no issuer
    /// annotation is present.
    pub default_auto_certificate_annotations: Vec<String>,
}
