use crate::{LinkGraph, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};
use tracing::debug;

static HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap());

/// Builds a [`LinkGraph`] from a flat directory of HTML pages.
///
/// A page links to every `href` target found in its markup, minus itself and
/// minus targets that are not pages of the corpus.
pub fn crawl(dir: &Path) -> Result<LinkGraph> {
    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        let links = HREF
            .captures_iter(&contents)
            .map(|c| c[1].to_string())
            .filter(|target| target != name)
            .collect();
        pages.insert(name.to_string(), links);
    }
    let known: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|target| known.contains(target));
    }
    debug!(pages = pages.len(), "corpus crawled");
    LinkGraph::from_links(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;

    fn write_page(dir: &Path, name: &str, body: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        write!(f, "{body}").unwrap();
    }

    #[test]
    fn extracts_links_between_corpus_pages() {
        let dir = tempfile::tempdir().unwrap();
        write_page(
            dir.path(),
            "1.html",
            r#"<html><body><a href="2.html">two</a></body></html>"#,
        );
        write_page(
            dir.path(),
            "2.html",
            r#"<a href="1.html">one</a> <a class="x" href="3.html">three</a>"#,
        );
        write_page(dir.path(), "3.html", "<html>no links</html>");

        let g = crawl(dir.path()).unwrap();
        assert_eq!(g.page_count(), 3);
        assert_eq!(g.links("1.html").unwrap(), ["2.html"].into_iter().collect());
        assert_eq!(
            g.links("2.html").unwrap(),
            ["1.html", "3.html"].into_iter().collect()
        );
        assert_eq!(g.links("3.html").unwrap(), BTreeSet::new());
    }

    #[test]
    fn drops_self_links_and_links_leaving_the_corpus() {
        let dir = tempfile::tempdir().unwrap();
        write_page(
            dir.path(),
            "1.html",
            r#"<a href="1.html">me</a> <a href="https://example.com/x.html">out</a> <a href="2.html">two</a>"#,
        );
        write_page(dir.path(), "2.html", "");
        write_page(dir.path(), "notes.txt", r#"<a href="1.html">ignored</a>"#);

        let g = crawl(dir.path()).unwrap();
        assert_eq!(g.page_count(), 2);
        assert_eq!(g.links("1.html").unwrap(), ["2.html"].into_iter().collect());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");
        let res = crawl(&missing);
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn directory_without_pages_is_an_invalid_graph() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "notes.txt", "not a page");
        let res = crawl(dir.path());
        assert!(matches!(res, Err(Error::InvalidGraph(_))));
    }
}
