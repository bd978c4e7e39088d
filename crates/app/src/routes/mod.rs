pub mod admin;
pub mod not_found;
pub mod recommendations;
pub mod testimonials;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdFileText, LdLayoutDashboard, LdPackage, LdShield, LdSearch, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;

use admin::moderation::Moderation;
use admin::security::SecurityEvents;
use admin::subscriptions::Subscriptions;
use admin::users::AdminUsers;
use not_found::NotFound;
use recommendations::experiments::Experiments;
use recommendations::suggestions::Suggestions;
use testimonials::SubmitTestimonial;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::AdminUsers {})]
    #[layout(AppShell)]
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/testimonials")]
    Moderation {},
    #[route("/admin/subscriptions")]
    Subscriptions {},
    #[route("/admin/security")]
    SecurityEvents {},
    #[route("/recommendations")]
    Suggestions {},
    #[route("/recommendations/experiments")]
    Experiments {},
    #[route("/testimonials/new")]
    SubmitTestimonial {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Navigation sidebar plus the routed page.
#[component]
fn AppShell() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        div { class: "app-shell",
            nav { class: "app-nav",
                div { class: "app-nav-brand", "Marketplace Admin" }
                div { class: "app-nav-group",
                    div { class: "app-nav-label", "Admin" }
                    Link { to: Route::AdminUsers {}, active_class: "active",
                        Icon { icon: LdUsers, width: 18, height: 18 }
                        "Users"
                    }
                    Link { to: Route::Moderation {}, active_class: "active",
                        Icon { icon: LdUserCheck, width: 18, height: 18 }
                        "Testimonials"
                    }
                    Link { to: Route::Subscriptions {}, active_class: "active",
                        Icon { icon: LdPackage, width: 18, height: 18 }
                        "Subscriptions"
                    }
                    if flags.security_monitoring {
                        Link { to: Route::SecurityEvents {}, active_class: "active",
                            Icon { icon: LdShield, width: 18, height: 18 }
                            "Security"
                        }
                    }
                }
                div { class: "app-nav-group",
                    div { class: "app-nav-label", "Recommendations" }
                    Link { to: Route::Suggestions {}, active_class: "active",
                        Icon { icon: LdSearch, width: 18, height: 18 }
                        "Service suggestions"
                    }
                    if flags.experiments {
                        Link { to: Route::Experiments {}, active_class: "active",
                            Icon { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Experiments"
                        }
                    }
                }
                div { class: "app-nav-group",
                    div { class: "app-nav-label", "Public" }
                    Link { to: Route::SubmitTestimonial {}, active_class: "active",
                        Icon { icon: LdFileText, width: 18, height: 18 }
                        "Leave a review"
                    }
                }
            }
            main { class: "app-main", Outlet::<Route> {} }
        }
    }
}
