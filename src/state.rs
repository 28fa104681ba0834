use std::rc::Rc;

use yew::prelude::*;

use crate::client::PageContent;
use crate::error::FetchError;
use crate::page::Page;

/// Everything the page shows that can change.
///
/// `generation` counts page selections. Each fetch is tagged with the
/// generation it was dispatched under and its result is applied only while
/// that generation is still current, so a slow answer for a page the user
/// already left never overwrites a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub page: Page,
    pub brand: String,
    pub content: String,
    pub generation: u64,
}

impl ViewState {
    pub fn new(default_brand: impl Into<String>) -> Self {
        Self {
            page: Page::Home,
            brand: default_brand.into(),
            content: String::new(),
            generation: 0,
        }
    }

    pub fn fetch_key(&self) -> FetchKey {
        (self.page, self.generation)
    }
}

/// What a fetch effect is keyed on. A new key means a new GET.
pub type FetchKey = (Page, u64);

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Select(Page),
    Loaded {
        generation: u64,
        content: PageContent,
    },
    Failed {
        generation: u64,
        error: FetchError,
    },
}

impl Reducible for ViewState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::Select(page) if page == self.page => self,
            PageAction::Select(page) => Rc::new(ViewState {
                page,
                generation: self.generation + 1,
                ..(*self).clone()
            }),
            PageAction::Loaded {
                generation,
                content,
            } => {
                if generation != self.generation {
                    log::debug!(
                        "Dropping stale response (generation {}, current {})",
                        generation,
                        self.generation
                    );
                    return self;
                }
                Rc::new(ViewState {
                    brand: content.brand,
                    content: content.content,
                    ..(*self).clone()
                })
            }
            // Already logged where it happened; keep what is on screen.
            PageAction::Failed { .. } => self,
        }
    }
}
