use crate::ast;
use crate::config::ParsedOptions;
use crate::config::PickContext;
use crate::config::PickOptions;
use crate::operation::OperationKind;
use crate::operation::PrunedOperation;
use crate::schema::Schema;
use crate::PickError;
use crate::UninitializedResource;
use indexmap::IndexSet;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

type Result<T> = std::result::Result<T, PickError>;

/// A shared, re-initializable slot holding the current [`PickContext`].
///
/// Picks taken through the store run against the context that was current
/// when they started. [`ConfigStore::init`] and [`ConfigStore::reset`] swap
/// the context atomically and never affect a pick already running.
#[derive(Debug, Default)]
pub struct ConfigStore {
    context: RwLock<Option<Arc<PickContext>>>,
}
impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compose_document(
        &self,
        operations: Vec<PrunedOperation>,
        fragments_used: &IndexSet<String>,
    ) -> Result<ast::operation::Document> {
        self.current(UninitializedResource::Options)?
            .compose_document(operations, fragments_used)
    }

    /// The context picks currently run against.
    pub fn context(&self) -> Result<Arc<PickContext>> {
        self.current(UninitializedResource::Schema)
    }

    pub fn find_fragment_by_name(
        &self,
        fragment_name: &str,
    ) -> Result<ast::operation::FragmentDefinition> {
        self.current(UninitializedResource::Options)?
            .find_fragment_by_name(fragment_name)
            .cloned()
    }

    pub fn find_fragment_by_path(
        &self,
        segment: &str,
    ) -> Result<ast::operation::FragmentDefinition> {
        self.current(UninitializedResource::Options)?
            .find_fragment_by_path(segment)
            .cloned()
    }

    /// A document holding every registered fragment definition.
    pub fn get_document(&self) -> Result<ast::operation::Document> {
        Ok(self.current(UninitializedResource::Document)?.template_document().clone())
    }

    pub fn get_options(&self) -> Result<Arc<ParsedOptions>> {
        Ok(self.current(UninitializedResource::Options)?.shared_parsed_options())
    }

    pub fn get_schema(&self) -> Result<Arc<Schema>> {
        Ok(self.current(UninitializedResource::Schema)?.shared_schema())
    }

    /// Replace the current context with one built from `schema` and
    /// `options`. The previous context stays in place if building the new
    /// one fails.
    pub fn init(
        &self,
        schema: impl Into<Arc<Schema>>,
        options: Option<PickOptions>,
    ) -> Result<()> {
        let context = PickContext::new(schema, options.unwrap_or_default())?;
        let mut slot = self.context.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(context));
        log::debug!("config store initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.context.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    pub fn pick<S: AsRef<str>>(&self, field_paths: &[S]) -> Result<ast::operation::Document> {
        self.context()?.pick(field_paths)
    }

    pub fn pick_operation<S: AsRef<str>>(
        &self,
        kind: OperationKind,
        field_paths: &[S],
    ) -> Result<ast::operation::Document> {
        self.context()?.pick_operation(kind, field_paths)
    }

    /// Drop the current context, returning the store to its uninitialized
    /// state.
    pub fn reset(&self) {
        let mut slot = self.context.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        log::debug!("config store reset");
    }

    fn current(&self, resource: UninitializedResource) -> Result<Arc<PickContext>> {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
            .ok_or(PickError::Uninitialized(resource))
    }
}
