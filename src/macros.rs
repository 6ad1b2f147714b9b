macro_rules! fill_url {
    ($template:expr, $origin:expr, $page:expr) => {
        $template
            .replace("{origin}", $origin)
            .replace("{page}", &$page.to_string())
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fill_url() {
        let url = "{origin}/page/{page}/";

        assert_eq!(
            fill_url!(url, "https://egybest.org", 3),
            "https://egybest.org/page/3/"
        );
        assert_eq!(fill_url!("{origin}", "https://x.tld", 7), "https://x.tld");
    }
}
