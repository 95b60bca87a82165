use std::fmt;

/// Class of a single validation failure, rendered the way the API server names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Invalid,
    NotSupported,
    Duplicate,
    NotFound,
    TooLong,
    Forbidden,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "Required value",
            ErrorKind::Invalid => "Invalid value",
            ErrorKind::NotSupported => "Unsupported value",
            ErrorKind::Duplicate => "Duplicate value",
            ErrorKind::NotFound => "Not found",
            ErrorKind::TooLong => "Too long",
            ErrorKind::Forbidden => "Forbidden",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dotted path to a field, e.g. `spec.containers[0].resources.requests[cpu]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(root: &str) -> Self {
        FieldPath(root.to_string())
    }

    pub fn child(&self, name: &str) -> Self {
        FieldPath(format!("{}.{}", self.0, name))
    }

    pub fn index(&self, index: usize) -> Self {
        FieldPath(format!("{}[{}]", self.0, index))
    }

    pub fn key(&self, key: &str) -> Self {
        FieldPath(format!("{}[{}]", self.0, key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One violation found while validating a pod.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub field: String,
    pub detail: String,
}

impl FieldError {
    fn new(kind: ErrorKind, path: &FieldPath, detail: impl Into<String>) -> Self {
        FieldError {
            kind,
            field: path.as_str().to_string(),
            detail: detail.into(),
        }
    }

    pub fn required(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Required, path, detail)
    }

    pub fn invalid(path: &FieldPath, value: &str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Invalid, path, format!("{:?}: {}", value, detail.into()))
    }

    pub fn not_supported(path: &FieldPath, value: &str, supported: &[&str]) -> Self {
        let supported: Vec<String> = supported.iter().map(|value| format!("{:?}", value)).collect();
        Self::new(
            ErrorKind::NotSupported,
            path,
            format!("{:?}: supported values: {}", value, supported.join(", ")),
        )
    }

    pub fn duplicate(path: &FieldPath, value: &str) -> Self {
        Self::new(ErrorKind::Duplicate, path, format!("{:?}", value))
    }

    pub fn not_found(path: &FieldPath, value: &str) -> Self {
        Self::new(ErrorKind::NotFound, path, format!("{:?}", value))
    }

    pub fn too_long(path: &FieldPath, max_length: usize) -> Self {
        Self::new(
            ErrorKind::TooLong,
            path,
            format!("must have at most {} bytes", max_length),
        )
    }

    pub fn forbidden(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, path, detail)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.field)
    }
}

/// All violations of one rejected pod, in the order they were found.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPod {
    pub pod: String,
    pub errors: Vec<FieldError>,
}

impl fmt::Display for InvalidPod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "invalid pod {:?}: {}", self.pod, errors.join(", "))
    }
}

/// Aggregate of every rejected pod of one ingestion call, one line per pod.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<InvalidPod>);

impl ValidationErrors {
    pub fn pods(&self) -> &[InvalidPod] {
        &self.0
    }

    pub fn field_errors(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter().flat_map(|pod| pod.errors.iter())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}
