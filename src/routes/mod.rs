use dioxus::prelude::*;

pub mod home;
pub mod settings;

use home::Home;
use settings::Settings;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/settings")]
        Settings {},
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground",

            header {
                class: "border-b border-border px-6 py-3 flex items-center gap-6",
                span {
                    class: "text-xl font-bold",
                    "Atmosphere"
                }
                nav {
                    class: "flex gap-4",
                    NavLink {
                        to: Route::Home {},
                        label: "Dashboard",
                        active: matches!(current_route, Route::Home {}),
                    }
                    NavLink {
                        to: Route::Settings {},
                        label: "Settings",
                        active: matches!(current_route, Route::Settings {}),
                    }
                }
            }

            main {
                class: "max-w-3xl mx-auto p-6",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str, active: bool) -> Element {
    let weight = if active { "font-bold" } else { "text-muted-foreground" };

    rsx! {
        Link {
            to,
            class: "hover:text-foreground transition {weight}",
            "{label}"
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div {
            class: "max-w-xl mx-auto p-6 text-center",
            h1 {
                class: "text-2xl font-bold mb-2",
                "Page not found"
            }
            p {
                class: "text-muted-foreground mb-4",
                "/{path}"
            }
            Link {
                to: Route::Home {},
                class: "text-primary hover:underline",
                "Back to the dashboard"
            }
        }
    }
}
