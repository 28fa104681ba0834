use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::client::{fetch_for_key, ContentClient};
use crate::config::AppConfig;
use crate::state::ViewState;

/// Page state plus the fetch that follows it.
///
/// Fires once on mount and again whenever a selection changes the fetch key.
/// Nothing is cancelled; stale answers are filtered by the reducer.
#[hook]
pub fn use_page_content<C>(client: C, config: AppConfig) -> UseReducerHandle<ViewState>
where
    C: ContentClient + Clone + 'static,
{
    let state = {
        let brand = config.default_brand.clone();
        use_reducer_eq(move || ViewState::new(brand))
    };

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.fetch_key(), move |&key| {
            spawn_local(async move {
                let action = fetch_for_key(&client, &config, key).await;
                dispatcher.dispatch(action);
            });
            || ()
        });
    }

    state
}
