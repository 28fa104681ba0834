use yew::prelude::*;

use crate::page::Page;

#[derive(Properties, PartialEq)]
pub struct BrandHeaderProps {
    pub brand: AttrValue,
}

#[function_component(BrandHeader)]
pub fn brand_header(props: &BrandHeaderProps) -> Html {
    html! {
        <header class="header">
            <h1 class="brand">{ props.brand.clone() }</h1>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Page,
    pub on_select: Callback<Page>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="nav">
            { for Page::ALL.into_iter().map(|page| {
                let onclick = props.on_select.reform(move |_: MouseEvent| page);
                let active = (page == props.current).then_some("active");
                html! {
                    <button class={classes!("nav-btn", active)} {onclick}>
                        { page.label() }
                    </button>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageBodyProps {
    pub page: Page,
    pub content: AttrValue,
}

#[function_component(PageBody)]
pub fn page_body(props: &PageBodyProps) -> Html {
    html! {
        <main class="main">
            <h2 class="page-title">{ props.page.title() }</h2>
            <p class="content-text">{ props.content.clone() }</p>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: u32,
    pub author: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            { format!("© {} {}, All rights reserved.", props.year, props.author) }
        </footer>
    }
}

/// The whole page for a given state. Holds no state of its own.
#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub page: Page,
    pub brand: AttrValue,
    pub content: AttrValue,
    pub year: u32,
    pub author: AttrValue,
    pub on_select: Callback<Page>,
}

#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    html! {
        <div class="container">
            <BrandHeader brand={props.brand.clone()} />
            <NavBar current={props.page} on_select={props.on_select.clone()} />
            <PageBody page={props.page} content={props.content.clone()} />
            <Footer year={props.year} author={props.author.clone()} />
        </div>
    }
}
