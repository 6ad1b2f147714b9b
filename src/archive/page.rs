use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

use super::{DetailSelectors, EntrySelectors, NextPage, selector};
use crate::anime::{Details, Entry, Episode};
use crate::parser::{self, normalize_title, url_without_domain};
use crate::video::ServerLink;

/// Whitespace-collapsed text of a node
fn text(elem: ElementRef) -> String {
    elem.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(parent: ElementRef, s: &str) -> String {
    parent
        .select(&selector::from(s))
        .next()
        .map(text)
        .unwrap_or_default()
}

fn first_attr(parent: ElementRef, s: &str, attrs: &[&str]) -> String {
    parent
        .select(&selector::from(s))
        .next()
        .and_then(|e| attrs.iter().find_map(|a| e.value().attr(a)))
        .map(|a| a.trim().to_string())
        .unwrap_or_default()
}

pub fn parse_listing(doc: &Html, item: &str, selectors: &EntrySelectors) -> Vec<Entry> {
    let root = doc.root_element();

    root.select(&selector::from(item))
        .map(|e| {
            let url = url_without_domain(&first_attr(e, selectors.link, &["href"]));
            let title = first_text(e, selectors.title);
            let title = match selectors.normalize {
                true => normalize_title(&title, true),
                false => title,
            };
            let thumbnail = first_attr(e, selectors.thumbnail, &["src", "data-src"]);

            Entry {
                url,
                title,
                thumbnail,
            }
        })
        .collect()
}

pub fn parse_episodes(doc: &Html, anchor: &str) -> Vec<Episode> {
    doc.select(&selector::from(anchor))
        .map(|a| Episode {
            url: url_without_domain(a.value().attr("href").unwrap_or_default()),
            name: text(a),
        })
        .collect()
}

pub fn parse_details(doc: &Html, selectors: &DetailSelectors, finished: &[&str]) -> Details {
    let root = doc.root_element();

    let title = first_text(root, selectors.title);
    let thumbnail = first_attr(root, selectors.thumbnail, &["src", "data-src"]);
    let description = doc
        .select(&selector::from(selectors.description))
        .map(text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let link = selector::from(selectors.info_link);
    let info: Vec<_> = doc.select(&selector::from(selectors.info_item)).collect();

    let genres = info
        .iter()
        .flat_map(|li| li.select(&link).map(text))
        .filter(|g| !g.is_empty())
        .collect();

    let mut attribution = BTreeMap::new();
    for (key, label) in selectors.attribution {
        if let Some(li) = info.iter().find(|li| text(**li).contains(label)) {
            let value = li.select(&link).map(text).collect::<Vec<_>>().join(", ");
            attribution.insert(key.to_string(), value);
        }
    }

    let status = parser::status(&title, finished);

    Details {
        title,
        thumbnail,
        description,
        genres,
        status,
        attribution,
    }
}

/// Server links behind the view gate, nodes without `attr` are skipped
pub fn parse_servers(doc: &Html, item: &str, attr: &str) -> Vec<ServerLink> {
    doc.select(&selector::from(item))
        .filter_map(|e| e.value().attr(attr))
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(ServerLink::new)
        .collect()
}

pub fn has_next_page(doc: &Html, next: &NextPage) -> bool {
    doc.select(&selector::from(next.selector))
        .any(|e| next.text.is_none_or(|t| text(e).contains(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anime::Status;
    use crate::archive::Site;

    const LISTING: &str = r#"
    <html><body>
        <div class="pin-posts-list"><ul>
            <li class="movieItem">
                <a href="https://egybest.org/movie/the-batman-2022/">
                    <img src="https://egybest.org/img/batman.jpg">
                    <h1 class="BottomTitle">فيلم The Batman 2022 مترجم</h1>
                </a>
            </li>
            <li class="movieItem">
                <a href="/series/dark/">
                    <img data-src="/img/dark.jpg">
                    <h1 class="BottomTitle">مسلسل Dark الحلقة 3</h1>
                </a>
            </li>
            <li class="movieItem">
                <a href="/movie/untitled/"></a>
            </li>
        </ul></div>
        <div class="pagination"><ul class="page-numbers">
            <li><a class="next" href="/?page=2/">التالي</a></li>
        </ul></div>
    </body></html>"#;

    const DETAILS: &str = r#"
    <html><body>
        <div class="single-thumbnail"><img src="https://egybest.org/img/dark.jpg"></div>
        <div class="infoBox">
            <div class="singleTitle">مسلسل Dark كامل</div>
            <div class="extra-content"><p>A family saga</p><p>with a supernatural twist.</p></div>
        </div>
        <div class="LeftBox"><ul>
            <li><span>البلد :</span> <a href="/country/de/">ألمانيا</a></li>
            <li><span>القسم :</span> <a href="/cat/series/">مسلسلات أجنبي</a></li>
            <li><span>النوع :</span> <a href="/genre/drama/">دراما</a> <a href="/genre/scifi/">خيال علمي</a></li>
        </ul></div>
        <div class="EpsList"><ul>
            <li><a href="https://egybest.org/episode/dark-1/">الحلقة 1</a></li>
            <li><a href="/episode/dark-2/">الحلقة 2</a></li>
            <li><a href="/episode/dark-3/"> الحلقة   3 </a></li>
        </ul></div>
    </body></html>"#;

    const SERVERS: &str = r#"
    <ul class="serversList">
        <li data-link="https://dood.to/e/abc">DoodStream</li>
        <li data-link="https://mixdrop.co/e/xyz">MixDrop</li>
        <li>Broken</li>
        <li data-link=" https://wish.tld/e/1 ">VidHide</li>
    </ul>"#;

    #[test]
    fn test_parse_listing() {
        let config = Site::EgyBest.config();
        let doc = Html::parse_document(LISTING);

        let entries = parse_listing(&doc, config.popular.item, &config.entry);
        assert_eq!(entries.len(), 3);

        assert_eq!(
            entries[0],
            Entry {
                url: "/movie/the-batman-2022/".into(),
                title: "The Batman (مترجم)".into(),
                thumbnail: "https://egybest.org/img/batman.jpg".into(),
            }
        );
        assert_eq!(entries[1].title, "Dark (ep:3)");
        assert_eq!(entries[1].thumbnail, "/img/dark.jpg");

        assert_eq!(entries[2].url, "/movie/untitled/");
        assert!(entries[2].title.is_empty());
        assert!(entries[2].thumbnail.is_empty());
    }

    #[test]
    fn test_parse_listing_raw_titles() {
        let mut config = Site::EgyBest.config();
        config.entry.normalize = false;
        let doc = Html::parse_document(LISTING);

        let entries = parse_listing(&doc, config.popular.item, &config.entry);
        assert_eq!(entries[0].title, "فيلم The Batman 2022 مترجم");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let config = Site::EgyBest.config();
        let doc = Html::parse_document(LISTING);

        let first = parse_listing(&doc, config.popular.item, &config.entry);
        let second = parse_listing(&doc, config.popular.item, &config.entry);
        assert_eq!(first, second);

        let doc = Html::parse_document(DETAILS);
        let first = parse_details(&doc, &config.details, config.finished);
        let second = parse_details(&doc, &config.details, config.finished);
        assert_eq!(first, second);
    }

    #[test]
    fn test_selector_drift() {
        let config = Site::EgyBest.config();
        let doc = Html::parse_document("<html><body><p>maintenance</p></body></html>");

        assert!(parse_listing(&doc, config.search.item, &config.entry).is_empty());
        assert!(parse_episodes(&doc, config.episodes).is_empty());
        assert_eq!(
            parse_details(&doc, &config.details, config.finished),
            Details::default()
        );
    }

    #[test]
    fn test_parse_episodes() {
        let config = Site::EgyBest.config();
        let doc = Html::parse_document(DETAILS);

        let episodes = parse_episodes(&doc, config.episodes);
        assert_eq!(
            episodes,
            vec![
                Episode {
                    url: "/episode/dark-1/".into(),
                    name: "الحلقة 1".into()
                },
                Episode {
                    url: "/episode/dark-2/".into(),
                    name: "الحلقة 2".into()
                },
                Episode {
                    url: "/episode/dark-3/".into(),
                    name: "الحلقة 3".into()
                },
            ]
        );
    }

    #[test]
    fn test_parse_details() {
        let config = Site::EgyBest.config();
        let doc = Html::parse_document(DETAILS);

        let details = parse_details(&doc, &config.details, config.finished);
        assert_eq!(details.title, "مسلسل Dark كامل");
        assert_eq!(details.thumbnail, "https://egybest.org/img/dark.jpg");
        assert_eq!(details.description, "A family saga with a supernatural twist.");
        assert_eq!(details.status, Status::Completed);
        assert_eq!(
            details.genres,
            vec!["ألمانيا", "مسلسلات أجنبي", "دراما", "خيال علمي"]
        );
        assert_eq!(details.attribution["country"], "ألمانيا");
        assert_eq!(details.attribution["category"], "مسلسلات أجنبي");
    }

    #[test]
    fn test_parse_servers() {
        let config = Site::EgyBest.config();
        let doc = Html::parse_document(SERVERS);

        let links = parse_servers(&doc, config.servers, config.server_attr);
        assert_eq!(
            links,
            vec![
                ServerLink::new("https://dood.to/e/abc"),
                ServerLink::new("https://mixdrop.co/e/xyz"),
                ServerLink::new("https://wish.tld/e/1"),
            ]
        );
    }

    #[test]
    fn test_has_next_page() {
        let config = Site::EgyBest.config();
        let doc = Html::parse_document(LISTING);

        assert!(has_next_page(&doc, &config.latest.next_page));
        assert!(!has_next_page(&doc, &config.popular.next_page));

        let search = r#"<div class="pagination-two"><a href="/page/1/">‹</a><a href="/page/3/">›</a></div>"#;
        let doc = Html::parse_document(search);
        assert!(has_next_page(&doc, &config.search.next_page));

        let last = r#"<div class="pagination-two"><a href="/page/1/">‹</a></div>"#;
        let doc = Html::parse_document(last);
        assert!(!has_next_page(&doc, &config.search.next_page));
    }
}
