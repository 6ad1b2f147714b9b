use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::HeaderMap;

use super::{Host, unpacker};
use crate::errors::{Error, Result};
use crate::parser::regex;
use crate::transport::Transport;
use crate::video::Video;

static WURL: LazyLock<Regex> = LazyLock::new(|| regex(r#"MDCore\.wurl\s*=\s*"([^"]+)""#));

pub async fn videos_from_url<T: Transport>(transport: &T, url: &str) -> Result<Vec<Video>> {
    let embed = url.replace("/f/", "/e/");
    let page = transport.get(&embed, HeaderMap::new()).await?;

    let script =
        unpacker::unpack_html(&page).ok_or_else(|| Error::StreamNotFound(embed.clone()))?;
    let wurl = WURL
        .captures(&script)
        .map(|c| c[1].to_string())
        .ok_or_else(|| Error::StreamNotFound(embed.clone()))?;

    let src = match wurl.starts_with("//") {
        true => format!("https:{wurl}"),
        false => wurl,
    };

    Ok(vec![
        Video::new(&src, "MixDrop", Host::MixDrop).with_referer(&embed),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;

    const EMBED: &str = r#"<html><body><script>eval(function(p,a,c,k,e,d){while(c--)if(k[c])p=p.replace(new RegExp('\\b'+c.toString(a)+'\\b','g'),k[c]);return p}('0.1="//2.3.4/v/5.6?s=7";',36,8,'MDCore|wurl|s-delivery|mxcontent|net|abc|mp4|sig'.split('|'),0,{}))</script></body></html>"#;

    #[tokio::test]
    async fn test_videos_from_url() {
        let transport = FakeTransport::new().page("https://mixdrop.co/e/abc", EMBED);

        let videos = videos_from_url(&transport, "https://mixdrop.co/f/abc")
            .await
            .unwrap();

        assert_eq!(
            videos,
            vec![
                Video::new(
                    "https://s-delivery.mxcontent.net/v/abc.mp4?s=sig",
                    "MixDrop",
                    Host::MixDrop
                )
                .with_referer("https://mixdrop.co/e/abc")
            ]
        );
    }

    #[tokio::test]
    async fn test_not_packed() {
        let transport = FakeTransport::new().page("https://mixdrop.co/e/abc", "<html></html>");

        let res = videos_from_url(&transport, "https://mixdrop.co/e/abc").await;
        assert!(res.is_err());
    }
}
