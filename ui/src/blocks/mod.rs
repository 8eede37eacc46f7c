//! Page layout blocks.

use dioxus::prelude::*;

use crate::core::content::Block;

mod call_to_action;
mod hero;
mod two_column;

pub use call_to_action::CallToAction;
pub use hero::Hero;
pub use two_column::TwoColumnTextCta;

const BLOCKS_CSS: Asset = asset!("/assets/styling/blocks.css");

/// Render a page layout in order.
#[component]
pub fn RenderBlocks(blocks: Vec<Block>, locale: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BLOCKS_CSS }
        for (index, block) in blocks.into_iter().enumerate() {
            {render_block(index, block, locale.clone())}
        }
    }
}

fn render_block(index: usize, block: Block, locale: String) -> Element {
    match block {
        Block::Hero(block) => rsx! {
            Hero { key: "{index}", block, locale }
        },
        Block::CallToAction(block) => rsx! {
            CallToAction { key: "{index}", block, locale }
        },
        Block::TwoColumnTextCta(block) => rsx! {
            TwoColumnTextCta { key: "{index}", block, locale }
        },
    }
}
