//! Owned element tree for vector-drawable documents

use std::collections::HashMap;
use std::fmt;

use crate::error::Span;

/// Namespace of the platform attributes (`android:pathData`, ...)
pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Namespace of the resource compiler's inline attribute nodes (`aapt:attr`)
pub const AAPT_NS: &str = "http://schemas.android.com/aapt";

/// A namespace-qualified XML name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Namespace URI, `None` for unqualified names
    pub namespace: Option<String>,
    /// Local part of the name
    pub local: String,
}

impl QualifiedName {
    pub fn new(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local: local.into(),
        }
    }

    /// Name without a namespace
    pub fn local(local: impl Into<String>) -> Self {
        Self::new(None, local)
    }

    /// Name in the platform namespace
    pub fn android(local: impl Into<String>) -> Self {
        Self::new(Some(ANDROID_NS), local)
    }

    /// Name in the resource compiler namespace
    pub fn aapt(local: impl Into<String>) -> Self {
        Self::new(Some(AAPT_NS), local)
    }

    /// Whether this name has the given namespace and local part
    pub fn is(&self, namespace: Option<&str>, local: &str) -> bool {
        self.namespace.as_deref() == namespace && self.local == local
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace.as_deref() {
            Some(ANDROID_NS) => write!(f, "android:{}", self.local),
            Some(AAPT_NS) => write!(f, "aapt:{}", self.local),
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Element kinds the converter dispatches on
///
/// The kind is derived from the local name only, so a vendor prefix on a
/// known tag does not change how it is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Vector,
    Group,
    ClipPath,
    Path,
    Other,
}

impl ElementKind {
    pub fn from_local_name(local: &str) -> Self {
        match local {
            "vector" => ElementKind::Vector,
            "group" => ElementKind::Group,
            "clip-path" => ElementKind::ClipPath,
            "path" => ElementKind::Path,
            _ => ElementKind::Other,
        }
    }
}

/// A single element of a source document
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: QualifiedName,
    pub kind: ElementKind,
    pub attributes: HashMap<QualifiedName, String>,
    pub children: Vec<Element>,
    /// Byte range of the element in the source text (empty for built trees)
    pub span: Span,
}

impl Element {
    /// Create an element without attributes or children
    pub fn new(name: QualifiedName) -> Self {
        let kind = ElementKind::from_local_name(&name.local);
        Self {
            name,
            kind,
            attributes: HashMap::new(),
            children: vec![],
            span: 0..0,
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: QualifiedName, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    /// Add a platform-namespaced attribute
    pub fn with_android(self, local: &str, value: impl Into<String>) -> Self {
        self.with_attribute(QualifiedName::android(local), value)
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Look up an attribute by namespace and local name
    pub fn attribute(&self, namespace: Option<&str>, local: &str) -> Option<&str> {
        self.attributes
            .get(&QualifiedName::new(namespace, local))
            .map(String::as_str)
    }

    /// Look up a platform-namespaced attribute
    pub fn android_attribute(&self, local: &str) -> Option<&str> {
        self.attribute(Some(ANDROID_NS), local)
    }

    /// Direct children of the given kind, in document order
    pub fn children_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Direct children with the given qualified name, in document order
    pub fn children_named<'a>(
        &'a self,
        namespace: Option<&'a str>,
        local: &'a str,
    ) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter(move |child| child.name.is(namespace, local))
    }
}
