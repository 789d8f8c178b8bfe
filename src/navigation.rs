//! The top navigation bars for the public pages and the takmir area.

use maud::{Markup, html};

use crate::endpoints;

/// One link in the navigation bar. At most one link is current at a time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-emerald-700 rounded-sm \
            lg:bg-transparent lg:text-emerald-700 lg:p-0 dark:text-white \
            lg:dark:text-emerald-400"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100 \
            lg:hover:bg-transparent lg:hover:text-emerald-700 lg:p-0 \
            dark:text-white lg:dark:hover:text-emerald-400 \
            dark:hover:bg-gray-700"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

/// The top navigation bar.
pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// The navigation bar for donor-facing pages.
    ///
    /// The link matching `active_endpoint` is highlighted as current.
    pub fn public(active_endpoint: &str) -> NavBar<'_> {
        NavBar {
            links: vec![
                Link {
                    url: endpoints::CAMPAIGNS_VIEW,
                    title: "Kampanye",
                    is_current: active_endpoint == endpoints::CAMPAIGNS_VIEW,
                },
                Link {
                    url: endpoints::LOG_IN_VIEW,
                    title: "Masuk Takmir",
                    is_current: active_endpoint == endpoints::LOG_IN_VIEW,
                },
            ],
        }
    }

    /// The navigation bar for takmir pages.
    pub fn takmir(active_endpoint: &str) -> NavBar<'_> {
        NavBar {
            links: vec![
                Link {
                    url: endpoints::DASHBOARD_VIEW,
                    title: "Dashboard",
                    is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
                },
                Link {
                    url: endpoints::CAMPAIGNS_VIEW,
                    title: "Kampanye",
                    is_current: false,
                },
                Link {
                    url: endpoints::LOG_OUT,
                    title: "Keluar",
                    is_current: false,
                },
            ],
        }
    }

    /// Render the bar.
    pub fn into_html(self) -> Markup {
        html! {
            nav class="bg-white border-gray-200 dark:bg-gray-800 shadow-sm"
            {
                div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a href=(endpoints::ROOT) class="flex items-center space-x-3"
                    {
                        span class="self-center text-2xl font-semibold whitespace-nowrap text-emerald-700 dark:text-emerald-400"
                        {
                            "Infaqku"
                        }
                    }

                    ul class="font-medium flex flex-row space-x-8"
                    {
                        @for link in self.links
                        {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        }
    }
}
