use super::{DetailSelectors, EntrySelectors, Listing, NextPage, Requests, SiteConfig};
use crate::extractor::{DispatchTable, Host};

const DISPATCH: DispatchTable = DispatchTable::new(
    &[
        ("dood", Host::Dood),
        ("mixdrop", Host::MixDrop),
        ("uqload", Host::Uqload),
    ],
    Host::StreamWish,
);

const ENTRY: EntrySelectors = EntrySelectors {
    link: "a",
    title: "h1.BottomTitle",
    thumbnail: "a img",
    normalize: true,
};

const DETAILS: DetailSelectors = DetailSelectors {
    title: "div.infoBox div.singleTitle",
    thumbnail: "div.single-thumbnail img",
    description: "div.infoBox div.extra-content p",
    info_item: "div.LeftBox li",
    info_link: "a",
    attribution: &[("country", "البلد"), ("category", "القسم")],
};

pub const EGYBEST: SiteConfig = SiteConfig {
    name: "EgyBest",
    origin: "https://egybest.org",
    requests: Requests {
        popular: "{origin}",
        latest: "{origin}/?page={page}/",
        search: "{origin}/page/{page}/",
        search_param: "s",
    },
    popular: Listing {
        item: "div.pin-posts-list li.movieItem",
        // the home page is not paginated
        next_page: NextPage {
            selector: "div.whatever",
            text: None,
        },
    },
    latest: Listing {
        item: "section.main-section li.movieItem",
        next_page: NextPage {
            selector: "div.pagination ul.page-numbers li a.next",
            text: None,
        },
    },
    search: Listing {
        item: "div.catHolder li.movieItem",
        next_page: NextPage {
            selector: "div.pagination-two a",
            text: Some("›"),
        },
    },
    entry: ENTRY,
    details: DETAILS,
    episodes: "div.EpsList li a",
    servers: "ul.serversList li",
    server_attr: "data-link",
    gate_form: &[("View", "1")],
    finished: &["كامل", "فيلم"],
    dispatch: DISPATCH,
};
