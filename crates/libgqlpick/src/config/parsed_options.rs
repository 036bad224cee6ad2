use crate::ast;
use crate::config::config_validator;
use crate::config::FragmentSource;
use crate::config::PickOptions;
use crate::file_reader;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::schema::Schema;
use crate::ConfigurationError;
use std::borrow::Cow;
use std::path::Path;

type Result<T> = std::result::Result<T, ConfigurationError>;

/// [`PickOptions`] after validation against a [`Schema`], with every
/// fragment document loaded into a [`FragmentRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedOptions {
    circular_reference_depth: usize,
    fragment_registry: FragmentRegistry,
    no_resolve: Vec<String>,
    template_document: ast::operation::Document,
}
impl ParsedOptions {
    pub fn circular_reference_depth(&self) -> usize {
        self.circular_reference_depth
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        &self.fragment_registry
    }

    pub fn no_resolve(&self) -> &[String] {
        &self.no_resolve
    }

    pub fn parse(schema: &Schema, options: &PickOptions) -> Result<Self> {
        config_validator::validate_circular_reference_depth(
            options.circular_reference_depth,
        )?;
        config_validator::validate_no_resolve(schema, &options.no_resolve)?;

        let mut registry_builder = FragmentRegistryBuilder::new(schema);
        let mut errors = vec![];
        for source in &options.fragments {
            let (document, file_path) = load_fragment_source(source)?;
            check_fragment_only(&document, file_path)?;
            if let Err(errs) = registry_builder.add_from_document_ast(&document, file_path) {
                errors.extend(errs);
            }
        }
        if !errors.is_empty() {
            return Err(ConfigurationError::FragmentRegistryBuildErrors { errors });
        }

        let fragment_registry = registry_builder
            .build()
            .map_err(|errors| ConfigurationError::FragmentRegistryBuildErrors { errors })?;

        log::debug!(
            "registered {} fragment(s); no_resolve = [{}]",
            fragment_registry.fragments().len(),
            options.no_resolve.join(", "),
        );

        Ok(Self {
            circular_reference_depth: options.circular_reference_depth,
            template_document: fragment_registry.to_document(),
            fragment_registry,
            no_resolve: options.no_resolve.clone(),
        })
    }

    /// A document holding every registered fragment definition.
    pub fn template_document(&self) -> &ast::operation::Document {
        &self.template_document
    }
}

fn load_fragment_source(
    source: &FragmentSource,
) -> Result<(Cow<'_, ast::operation::Document>, Option<&Path>)> {
    match source {
        FragmentSource::Ast { document, file_path } =>
            Ok((Cow::Borrowed(document), file_path.as_deref())),

        FragmentSource::File(file_path) => {
            let content = file_reader::read_graphql_source(file_path)
                .map_err(|err| ConfigurationError::FragmentFileReadError(Box::new(err)))?;
            let document = parse_fragment_document(&content, Some(file_path.as_path()))?;
            Ok((Cow::Owned(document), Some(file_path.as_path())))
        },

        FragmentSource::Str { content, file_path } => {
            let document = parse_fragment_document(content, file_path.as_deref())?;
            Ok((Cow::Owned(document), file_path.as_deref()))
        },
    }
}

fn parse_fragment_document(
    content: &str,
    file_path: Option<&Path>,
) -> Result<ast::operation::Document> {
    ast::operation::parse(content).map_err(|err| ConfigurationError::FragmentParseError {
        err: err.to_string(),
        file_path: file_path.map(Path::to_path_buf),
    })
}

fn check_fragment_only(
    document: &ast::operation::Document,
    file_path: Option<&Path>,
) -> Result<()> {
    for def in &document.definitions {
        if let ast::operation::Definition::Operation(op_def) = def {
            let definition_desc = match op_def {
                ast::operation::OperationDefinition::Mutation(_) => "a mutation",
                ast::operation::OperationDefinition::Query(_) => "a query",
                ast::operation::OperationDefinition::SelectionSet(_) =>
                    "an anonymous selection set",
                ast::operation::OperationDefinition::Subscription(_) => "a subscription",
            };
            return Err(ConfigurationError::ImpureFragmentDocument {
                definition_desc: definition_desc.to_string(),
                file_path: file_path.map(Path::to_path_buf),
            });
        }
    }
    Ok(())
}
