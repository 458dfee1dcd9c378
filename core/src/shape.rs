//! Object shapes
//!
//! A [`Shape`] is the runtime stand-in for an object type: an ordered list of
//! named fields, each either a resolved [`ValueType`] or a nested shape, and
//! each either required or optional. Every derived model, value map and
//! composite primary key is a `Shape`.

use compact_str::CompactString;
use serde::Serialize;
use thiserror::Error;

use crate::paths;
use ormshape_types::ValueType;

/// What a shape field holds
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Value(ValueType),
    Object(Shape),
}

/// One named field of a [`Shape`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShapeField {
    pub name: CompactString,
    pub kind: FieldKind,
    /// Optional fields may be absent; required fields are always present.
    pub optional: bool,
}

impl ShapeField {
    #[must_use]
    pub fn value(name: impl Into<CompactString>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Value(ty),
            optional: false,
        }
    }

    #[must_use]
    pub fn object(name: impl Into<CompactString>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Object(shape),
            optional: false,
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub const fn value_type(&self) -> Option<&ValueType> {
        match &self.kind {
            FieldKind::Value(ty) => Some(ty),
            FieldKind::Object(_) => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Shape> {
        match &self.kind {
            FieldKind::Object(shape) => Some(shape),
            FieldKind::Value(_) => None,
        }
    }
}

/// A dotted path that names no field of the shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no field at path '{0}'")]
pub struct MissingPath(pub String);

/// An ordered object shape with unique field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Shape {
    fields: Vec<ShapeField>,
}

impl Shape {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field, replacing any existing field with the same name in place.
    pub fn insert(&mut self, field: ShapeField) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    #[must_use]
    pub fn with(mut self, field: ShapeField) -> Self {
        self.insert(field);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ShapeField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field by dotted path through nested objects.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&ShapeField> {
        let segments = paths::split(path);
        let (last, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment)?.as_object()?;
        }
        current.get(last)
    }

    #[must_use]
    pub fn fields(&self) -> &[ShapeField] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeField> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dotted paths of every value field, objects flattened.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_paths("", &mut out);
        out
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for field in &self.fields {
            let path = paths::join(prefix, &field.name);
            match &field.kind {
                FieldKind::Value(_) => out.push(path),
                FieldKind::Object(shape) => shape.collect_paths(&path, out),
            }
        }
    }

    /// Whether the value at `path` is guaranteed present: the field and
    /// every object above it are required.
    #[must_use]
    pub fn is_required(&self, path: &str) -> bool {
        let segments = paths::split(path);
        let mut current = self;
        for (idx, segment) in segments.iter().enumerate() {
            let Some(field) = current.get(segment) else {
                return false;
            };
            if field.optional {
                return false;
            }
            if idx + 1 == segments.len() {
                return true;
            }
            match field.as_object() {
                Some(shape) => current = shape,
                None => return false,
            }
        }
        false
    }

    /// Deep-partial copy: every field at every depth becomes optional.
    #[must_use]
    pub fn to_partial(&self) -> Self {
        self.clone().into_partial()
    }

    #[must_use]
    pub fn into_partial(self) -> Self {
        Self {
            fields: self
                .fields
                .into_iter()
                .map(|field| ShapeField {
                    name: field.name,
                    kind: match field.kind {
                        FieldKind::Object(shape) => FieldKind::Object(shape.into_partial()),
                        value => value,
                    },
                    optional: true,
                })
                .collect(),
        }
    }

    /// Project the shape onto exactly the given paths.
    ///
    /// A path may name a value field or a whole nested object. Objects on
    /// the way keep their optionality; fields keep the order of the
    /// requested paths.
    pub fn pick<'p>(&self, paths: impl IntoIterator<Item = &'p str>) -> Result<Self, MissingPath> {
        let mut picked = Self::new();
        for path in paths {
            let segments = paths::split(path);
            picked
                .pick_into(self, &segments)
                .ok_or_else(|| MissingPath(path.to_owned()))?;
        }
        Ok(picked)
    }

    fn pick_into(&mut self, source: &Self, segments: &[&str]) -> Option<()> {
        let (head, rest) = segments.split_first()?;
        let field = source.get(head)?;
        if rest.is_empty() {
            self.insert(field.clone());
            return Some(());
        }
        let nested_source = field.as_object()?;
        let mut nested = match self.get(head).and_then(ShapeField::as_object) {
            Some(existing) => existing.clone(),
            None => Self::new(),
        };
        nested.pick_into(nested_source, rest)?;
        self.insert(ShapeField {
            name: field.name.clone(),
            kind: FieldKind::Object(nested),
            optional: field.optional,
        });
        Some(())
    }

    /// Intersect two shapes: fields of `self` keep their position and type,
    /// fields only in `other` are appended, and a field present in both is
    /// required if either side requires it. Nested objects merge recursively.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for theirs in &other.fields {
            let Some(ours) = merged.fields.iter_mut().find(|f| f.name == theirs.name) else {
                merged.fields.push(theirs.clone());
                continue;
            };
            ours.optional = ours.optional && theirs.optional;
            if let (FieldKind::Object(a), FieldKind::Object(b)) = (&mut ours.kind, &theirs.kind) {
                *a = a.intersect(b);
            }
        }
        merged
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a ShapeField;
    type IntoIter = std::slice::Iter<'a, ShapeField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<ShapeField> for Shape {
    fn from_iter<I: IntoIterator<Item = ShapeField>>(iter: I) -> Self {
        let mut shape = Self::new();
        for field in iter {
            shape.insert(field);
        }
        shape
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.fields.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (idx, field) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            let marker = if field.optional { "?" } else { "" };
            match &field.kind {
                FieldKind::Value(ty) => write!(f, "{}{marker}: {ty}", field.name)?,
                FieldKind::Object(shape) => write!(f, "{}{marker}: {shape}", field.name)?,
            }
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormshape_types::ScalarType;

    fn text() -> ValueType {
        ValueType::Scalar(ScalarType::Text)
    }

    fn int() -> ValueType {
        ValueType::Scalar(ScalarType::Integer)
    }

    fn user() -> Shape {
        Shape::new()
            .with(ShapeField::value("id", int()))
            .with(ShapeField::value("name", text()))
            .with(ShapeField::object(
                "profile",
                Shape::new()
                    .with(ShapeField::value("bio", text()))
                    .with(ShapeField::value("age", int())),
            ))
    }

    #[test]
    fn test_display() {
        assert_eq!(
            user().to_string(),
            "{ id: i32, name: String, profile: { bio: String, age: i32 } }"
        );
        assert_eq!(Shape::new().to_string(), "{}");
    }

    #[test]
    fn test_paths_and_get_path() {
        let shape = user();
        assert_eq!(shape.paths(), vec!["id", "name", "profile.bio", "profile.age"]);
        assert_eq!(shape.get_path("profile.age").unwrap().value_type(), Some(&int()));
        assert!(shape.get_path("profile.missing").is_none());
        assert!(shape.get_path("id.nested").is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut shape = user();
        shape.insert(ShapeField::value("id", text()));
        assert_eq!(shape.len(), 3);
        assert_eq!(shape.fields()[0].value_type(), Some(&text()));
    }

    #[test]
    fn test_partial_is_deep() {
        let partial = user().into_partial();
        assert_eq!(
            partial.to_string(),
            "{ id?: i32, name?: String, profile?: { bio?: String, age?: i32 } }"
        );
        assert!(!partial.is_required("profile.bio"));
        assert!(user().is_required("profile.bio"));
    }

    #[test]
    fn test_pick_exact_paths() {
        let picked = user().pick(["profile.age", "id"]).unwrap();
        assert_eq!(picked.to_string(), "{ profile: { age: i32 }, id: i32 }");

        let whole = user().pick(["profile"]).unwrap();
        assert_eq!(whole.paths(), vec!["profile.bio", "profile.age"]);

        assert_eq!(
            user().pick(["profile.nope"]),
            Err(MissingPath("profile.nope".to_owned()))
        );
    }

    #[test]
    fn test_pick_merges_siblings() {
        let picked = user().pick(["profile.bio", "profile.age"]).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked.paths(), vec!["profile.bio", "profile.age"]);
    }

    #[test]
    fn test_intersect_requires_either_side() {
        let input = user().into_partial().pick(["name", "profile.bio"]).unwrap();
        let generated = user().pick(["id", "profile.age"]).unwrap();
        let merged = input.intersect(&generated);

        assert_eq!(
            merged.to_string(),
            "{ name?: String, profile: { bio?: String, age: i32 }, id: i32 }"
        );
        assert!(merged.is_required("id"));
        assert!(merged.is_required("profile.age"));
        assert!(!merged.is_required("name"));
    }

    #[test]
    fn test_serialize_transparent() {
        let json = serde_json::to_value(Shape::new().with(ShapeField::value("id", int()))).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "id");
        assert_eq!(json[0]["optional"], false);
    }
}
