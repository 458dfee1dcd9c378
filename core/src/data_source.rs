//! Data source registry
//!
//! A [`DataSource`] owns one driver and every entity registered against it.
//! Registration validates the descriptor and caches its [`EntityShapes`];
//! lookups are plain map reads. Relations are checked by
//! [`DataSource::finish`], and on every registration after it.

use std::borrow::Cow;

use compact_str::CompactString;
use hashbrown::HashMap;
use ormshape_types::{Driver, ValueType};

use crate::{
    config::OrmConfig,
    derived::EntityShapes,
    error::{Result, SchemaError},
    schema::{Entity, EntityRef},
    validate,
};

/// An accepted entity with its derived shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisteredEntity {
    entity: Entity,
    shapes: EntityShapes,
}

impl RegisteredEntity {
    #[inline]
    #[must_use]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    #[inline]
    #[must_use]
    pub fn shapes(&self) -> &EntityShapes {
        &self.shapes
    }
}

/// Driver plus the registry of entities resolved against it.
///
/// # Examples
///
/// ```
/// use ormshape_core::{DataSource, schema::{Column, Entity}};
/// use ormshape_types::Driver;
///
/// let mut source = DataSource::new(Driver::sqlite());
/// source
///     .register(Entity::new("Tag").column(Column::new("id", "text").primary()))
///     .unwrap();
///
/// let shapes = source.shapes("Tag").unwrap();
/// assert_eq!(shapes.mixed_primary_key.to_string(), "String");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DataSource {
    driver: Driver,
    entities: HashMap<CompactString, RegisteredEntity>,
    order: Vec<CompactString>,
    finished: bool,
}

impl DataSource {
    #[must_use]
    pub fn new(driver: impl Into<Driver>) -> Self {
        Self {
            driver: driver.into(),
            entities: HashMap::new(),
            order: Vec::new(),
            finished: false,
        }
    }

    /// Build a registry from configuration, checking relations once every
    /// entity is in.
    pub fn from_config(config: &OrmConfig) -> Result<Self> {
        let mut source = Self::new(config.driver());
        for entity in &config.entities {
            source.register(entity.clone())?;
        }
        source.finish()
    }

    #[inline]
    #[must_use]
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Validate `entity`, derive its shapes and add it to the registry.
    ///
    /// Before [`finish`](Self::finish), relation targets are not checked
    /// here so entities can reference ones registered later. Once finished,
    /// the new entity's relations must resolve against the registry.
    pub fn register(&mut self, entity: impl Into<Entity>) -> Result<&EntityShapes> {
        let entity = entity.into();
        let name = CompactString::from(entity.name());

        if self.entities.contains_key(&name) {
            let err = SchemaError::DuplicateEntity(name);
            crate::ormshape_trace_reject!(entity.name(), err);
            return Err(err);
        }

        let shapes = match validate::validate_entity(&entity, &self.driver)
            .and_then(|()| {
                if self.finished {
                    self.check_relations(&entity)?;
                }
                EntityShapes::derive(&entity, &self.driver)
            }) {
            Ok(shapes) => shapes,
            Err(err) => {
                crate::ormshape_trace_reject!(entity.name(), err);
                return Err(err);
            }
        };

        crate::ormshape_trace_register!(
            entity.name(),
            entity.columns.len(),
            shapes.all_paths.len()
        );

        self.order.push(name.clone());
        let registered = self
            .entities
            .entry(name)
            .or_insert(RegisteredEntity { entity, shapes });
        Ok(&registered.shapes)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_entity(mut self, entity: impl Into<Entity>) -> Result<Self> {
        self.register(entity)?;
        Ok(self)
    }

    /// Check every relation's target and inverse against the registry.
    pub fn validate_relations(&self) -> Result<()> {
        for registered in self.registered() {
            validate::validate_relations(&registered.entity, |name| {
                self.entities.get(name).map(|r| &r.entity)
            })
            .inspect_err(|err| {
                crate::ormshape_trace_reject!(registered.entity.name(), err);
            })?;
        }
        Ok(())
    }

    /// Finish registration: validate relations and hand back the registry.
    ///
    /// Entities registered afterwards have their relations checked
    /// immediately.
    pub fn finish(mut self) -> Result<Self> {
        self.validate_relations()?;
        self.finished = true;
        Ok(self)
    }

    // Relations of an entity outside the registry, which may refer to itself.
    fn check_relations(&self, entity: &Entity) -> Result<()> {
        validate::validate_relations(entity, |name| {
            if name == entity.name() {
                Some(entity)
            } else {
                self.entities.get(name).map(|r| &r.entity)
            }
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredEntity> {
        self.entities.get(name)
    }

    /// Look up a registered entity by name.
    pub fn entity(&self, name: &str) -> Result<&Entity> {
        self.get(name)
            .map(RegisteredEntity::entity)
            .ok_or_else(|| SchemaError::UnknownEntity(name.into()))
    }

    /// Resolve an entity reference: names go through the registry, direct
    /// descriptors are returned as is.
    pub fn resolve<'a>(&'a self, entity: impl Into<EntityRef<'a>>) -> Result<&'a Entity> {
        match entity.into() {
            EntityRef::Name(name) => self.entity(name),
            EntityRef::Entity(entity) => Ok(entity),
        }
    }

    /// Derived shapes for an entity reference.
    ///
    /// Registered entities, and direct descriptors equal to a registered
    /// one, are served from the cache. Any other descriptor is validated,
    /// including its relations against the registry, and derived on the spot.
    pub fn shapes<'a>(&'a self, entity: impl Into<EntityRef<'a>>) -> Result<Cow<'a, EntityShapes>> {
        match entity.into() {
            EntityRef::Name(name) => self
                .get(name)
                .map(|r| Cow::Borrowed(&r.shapes))
                .ok_or_else(|| SchemaError::UnknownEntity(name.into())),
            EntityRef::Entity(entity) => match self.get(entity.name()) {
                Some(registered) if registered.entity == *entity => {
                    Ok(Cow::Borrowed(&registered.shapes))
                }
                _ => {
                    validate::validate_entity(entity, &self.driver)?;
                    self.check_relations(entity)?;
                    EntityShapes::derive(entity, &self.driver).map(Cow::Owned)
                }
            },
        }
    }

    /// Value type of the column at `path` on the referenced entity.
    pub fn column_type<'a>(&'a self, entity: impl Into<EntityRef<'a>>, path: &str) -> Result<ValueType> {
        self.resolve(entity)?.resolve_path(&self.driver, path)
    }

    /// Registered entities in registration order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.registered().map(RegisteredEntity::entity)
    }

    fn registered(&self) -> impl Iterator<Item = &RegisteredEntity> {
        self.order.iter().filter_map(|name| self.entities.get(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
