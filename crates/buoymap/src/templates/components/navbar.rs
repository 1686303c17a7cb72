use maud::{html, Markup};

use crate::templates::layouts::CurrentPage;

/// Navigation bar; pages swap into `#main-content` through HTMX
pub fn navbar(current_page: CurrentPage) -> Markup {
    html! {
        nav class="navbar mb-4" role="navigation" aria-label="main navigation" {
            div class="navbar-brand" {
                a role="button" class="navbar-burger" aria-label="menu"
                  aria-expanded="false" data-target="navbarMenu" {
                    span aria-hidden="true" {}
                    span aria-hidden="true" {}
                    span aria-hidden="true" {}
                }
            }

            div id="navbarMenu" class="navbar-menu" {
                div class="navbar-start" {
                    a href="/"
                      class=(nav_item_class(current_page, CurrentPage::Map))
                      hx-get="/"
                      hx-target="#main-content"
                      hx-select="#main-content > *"
                      hx-push-url="true"
                      hx-swap="innerHTML" {
                        span class="icon-text" {
                            span class="icon" { (map_icon()) }
                            span { "Map" }
                        }
                    }

                    a href="/stations"
                      class=(nav_item_class(current_page, CurrentPage::Stations))
                      hx-get="/stations"
                      hx-target="#main-content"
                      hx-select="#main-content > *"
                      hx-push-url="true"
                      hx-swap="innerHTML" {
                        span class="icon-text" {
                            span class="icon" { (table_icon()) }
                            span { "Stations" }
                        }
                    }
                }
            }
        }
    }
}

fn nav_item_class(current: CurrentPage, page: CurrentPage) -> &'static str {
    if current == page {
        "navbar-item is-active"
    } else {
        "navbar-item"
    }
}

fn map_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            polygon points="1 6 1 22 8 18 16 22 23 18 23 2 16 6 8 2 1 6" {}
            line x1="8" y1="2" x2="8" y2="18" {}
            line x1="16" y1="6" x2="16" y2="22" {}
        }
    }
}

fn table_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            rect x="3" y="3" width="18" height="18" rx="2" ry="2" {}
            line x1="3" y1="9" x2="21" y2="9" {}
            line x1="3" y1="15" x2="21" y2="15" {}
            line x1="12" y1="3" x2="12" y2="21" {}
        }
    }
}
