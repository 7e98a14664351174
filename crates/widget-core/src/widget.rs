//! Widget Controller
//!
//! Owns one widget's document together with its store and renderer, and runs
//! the mutate → persist → render cycle.

use crate::error::StoreError;
use crate::store::{load_document, save_document, Document, KeyValueStore};

/// Draws a widget from its document
pub trait Renderer<D> {
    fn render(&mut self, doc: &D);
}

impl<D, F: FnMut(&D)> Renderer<D> for F {
    fn render(&mut self, doc: &D) {
        self(doc)
    }
}

pub struct Widget<D, S, R> {
    key: String,
    doc: D,
    store: S,
    renderer: R,
}

impl<D, S, R> Widget<D, S, R>
where
    D: Document,
    S: KeyValueStore,
    R: Renderer<D>,
{
    /// Load the persisted document (or the default) and draw it once
    pub fn load(key: impl Into<String>, store: S, mut renderer: R) -> Self {
        let key = key.into();
        let doc: D = load_document(&store, &key);
        renderer.render(&doc);
        Self { key, doc, store, renderer }
    }

    pub fn doc(&self) -> &D {
        &self.doc
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run a mutator on a copy of the document. On success the result replaces
    /// the document, is persisted and rendered; on error nothing changes.
    pub fn apply<T, E>(&mut self, mutate: impl FnOnce(D) -> Result<(D, T), E>) -> Result<T, E> {
        let (next, out) = mutate(self.doc.clone())?;
        self.doc = next;
        self.persist();
        self.renderer.render(&self.doc);
        Ok(out)
    }

    /// Drop the stored document and start over from the default
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(&self.key) {
            log::warn!("could not clear `{}`: {}", self.key, e);
        }
        self.doc = D::default();
        self.renderer.render(&self.doc);
    }

    // Last write wins; a failed write keeps the in-memory document.
    fn persist(&mut self) {
        if let Err(e) = save_document(&mut self.store, &self.key, &self.doc) {
            match e {
                StoreError::Serialize(_) => log::error!("could not encode `{}`: {}", self.key, e),
                _ => log::warn!("could not persist `{}`: {}", self.key, e),
            }
        }
    }
}
