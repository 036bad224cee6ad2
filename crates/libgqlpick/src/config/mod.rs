mod config_store;
mod config_validator;
mod parsed_options;
mod pick_context;
mod pick_options;

pub use config_store::ConfigStore;
pub use parsed_options::ParsedOptions;
pub use pick_context::PickContext;
pub use pick_options::FragmentSource;
pub use pick_options::PickOptions;
pub use pick_options::PickOptionsBuilder;
pub use pick_options::DEFAULT_CIRCULAR_REFERENCE_DEPTH;
