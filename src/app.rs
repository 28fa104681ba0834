use yew::prelude::*;

use crate::client::{ContentClient, HttpContentClient};
use crate::config::AppConfig;
use crate::hooks::use_page_content;
use crate::page::Page;
use crate::state::PageAction;
use crate::view::PageView;

/// Calendar year from the browser clock.
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[derive(Properties, PartialEq)]
pub struct PacificAppProps<C>
where
    C: ContentClient + Clone + PartialEq + 'static,
{
    pub client: C,
    #[prop_or_else(AppConfig::from_env)]
    pub config: AppConfig,
    /// Footer year source, read on first render only.
    #[prop_or(current_year as fn() -> u32)]
    pub clock: fn() -> u32,
}

#[function_component(PacificApp)]
pub fn pacific_app<C>(props: &PacificAppProps<C>) -> Html
where
    C: ContentClient + Clone + PartialEq + 'static,
{
    let year = use_state(props.clock);
    let state = use_page_content(props.client.clone(), props.config.clone());

    let on_select = {
        let state = state.clone();
        Callback::from(move |page: Page| state.dispatch(PageAction::Select(page)))
    };

    html! {
        <PageView
            page={state.page}
            brand={state.brand.clone()}
            content={state.content.clone()}
            year={*year}
            author={props.config.author.clone()}
            {on_select}
        />
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! { <PacificApp<HttpContentClient> client={HttpContentClient} /> }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;

    use super::*;
    use crate::client::testing::ScriptedClient;

    thread_local! {
        static CLOCK_READS: Cell<u32> = const { Cell::new(0) };
    }

    fn counting_clock() -> u32 {
        CLOCK_READS.with(|reads| reads.set(reads.get() + 1));
        1999
    }

    async fn render(props: PacificAppProps<ScriptedClient>) -> String {
        LocalSet::new()
            .run_until(async move {
                LocalServerRenderer::<PacificApp<ScriptedClient>>::with_props(props)
                    .hydratable(false)
                    .render()
                    .await
            })
            .await
    }

    #[tokio::test]
    async fn test_first_render_reads_clock_once() {
        let html = render(PacificAppProps {
            client: ScriptedClient::default(),
            config: AppConfig::default(),
            clock: counting_clock,
        })
        .await;

        assert_eq!(CLOCK_READS.with(Cell::get), 1);
        assert!(html.contains("© 1999 Harshit Roy, All rights reserved."));
    }

    #[tokio::test]
    async fn test_initial_render_before_any_fetch() {
        let config = AppConfig {
            default_brand: "pacific".into(),
            ..AppConfig::default()
        };
        let html = render(PacificAppProps {
            client: ScriptedClient::default(),
            config,
            clock: || 2026,
        })
        .await;

        assert!(html.contains(r#"<h1 class="brand">pacific</h1>"#));
        assert!(html.contains(r#"<h2 class="page-title">Home Page</h2>"#));
        assert!(html.contains(r#"<p class="content-text"></p>"#));
        assert!(html.contains(r#"<button class="nav-btn active">Home</button>"#));
        assert!(html.contains("© 2026 "));
    }
}
