use crate::ast;
use crate::config::ParsedOptions;
use crate::config::PickOptions;
use crate::operation::DocumentComposer;
use crate::operation::FragmentRegistry;
use crate::operation::PrunedOperation;
use crate::path;
use crate::schema::Schema;
use crate::PickError;
use indexmap::IndexSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PickError>;

/// An immutable pairing of a [`Schema`] with validated [`PickOptions`].
///
/// Every pick runs against a `PickContext`. It holds no mutable state, so
/// any number of picks may run against the same context concurrently.
#[derive(Clone, Debug)]
pub struct PickContext {
    options: PickOptions,
    parsed_options: Arc<ParsedOptions>,
    schema: Arc<Schema>,
}
impl PickContext {
    /// Validate `options` against `schema` and load every fragment document
    /// they name.
    pub fn new(schema: impl Into<Arc<Schema>>, options: PickOptions) -> Result<Self> {
        let schema = schema.into();
        let parsed_options = ParsedOptions::parse(&schema, &options)?;
        Ok(Self {
            options,
            parsed_options: Arc::new(parsed_options),
            schema,
        })
    }

    /// Merge already-pruned operations into one document, appending the
    /// definitions of `fragments_used` and every fragment they depend on.
    pub fn compose_document(
        &self,
        operations: Vec<PrunedOperation>,
        fragments_used: &IndexSet<String>,
    ) -> Result<ast::operation::Document> {
        DocumentComposer::new(self.fragment_registry()).compose(operations, fragments_used)
    }

    pub fn find_fragment_by_name(
        &self,
        fragment_name: &str,
    ) -> Result<&ast::operation::FragmentDefinition> {
        self.fragment_registry()
            .get(fragment_name)
            .map(|fragment| fragment.definition())
            .ok_or_else(|| PickError::UnmatchedFragment {
                fragment_name: fragment_name.to_string(),
            })
    }

    /// Look up a fragment by a `__fragment_<Name>` path segment.
    pub fn find_fragment_by_path(
        &self,
        segment: &str,
    ) -> Result<&ast::operation::FragmentDefinition> {
        let fragment_name = path::parse_fragment_segment(segment)
            .ok_or_else(|| PickError::UnmatchedFragment {
                fragment_name: segment.to_string(),
            })?;
        self.find_fragment_by_name(fragment_name)
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        self.parsed_options.fragment_registry()
    }

    pub fn options(&self) -> &PickOptions {
        &self.options
    }

    pub fn parsed_options(&self) -> &ParsedOptions {
        &self.parsed_options
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn shared_parsed_options(&self) -> Arc<ParsedOptions> {
        Arc::clone(&self.parsed_options)
    }

    pub(crate) fn shared_schema(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    pub fn template_document(&self) -> &ast::operation::Document {
        self.parsed_options.template_document()
    }
}
