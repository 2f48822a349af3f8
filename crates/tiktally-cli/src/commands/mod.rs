pub mod completions;
pub mod count;
pub mod list;
pub mod tokenize;

use tiktally_config::Config;
use tiktally_tokens::Selector;

use crate::cli::SelectorArgs;

/// Build a selector from the CLI flags, falling back to the configured
/// default model when neither --model nor --encoding is given.
pub(crate) fn selector_for<'a>(args: &'a SelectorArgs, config: &'a Config) -> Selector<'a> {
    let mut selector = Selector::new();

    if let Some(model) = &args.model {
        selector = selector.model(model);
    }
    if let Some(encoding) = &args.encoding {
        selector = selector.encoding(encoding);
    }
    if args.model.is_none() && args.encoding.is_none() {
        selector = selector.model(&config.default_model);
    }

    selector
}
