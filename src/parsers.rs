pub mod predictive;
mod reader;
pub mod table;

use crate::grammar::FollowItem;

/// The display spelling of the end-of-input marker
pub const END_MARK: &str = "$";

#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
/// An input symbol, including the end-of-input marker
pub enum InputSymbol {
    Terminal(usize),
    EndOfInput,
}

impl InputSymbol {
    /// Builds an InputSymbol from a FOLLOW set item
    pub fn from_follow_item(item: FollowItem) -> InputSymbol {
        match item {
            FollowItem::Terminal(t) => InputSymbol::Terminal(t),
            FollowItem::EndOfInput => InputSymbol::EndOfInput,
        }
    }
}
