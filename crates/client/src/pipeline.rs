//! URL to tag list, end to end.

use std::sync::Arc;

use tagbot_core::{AppConfig, Error, LexiconTagger, PosTagger, TagList, tags_for_page};

use crate::extract::{Extractor, HtmlExtractor};
use crate::fetch::{FetchClient, FetchConfig};

/// Fetch, extract and tag, with each stage swappable.
pub struct TagPipeline {
    fetch: FetchClient,
    extractor: Arc<dyn Extractor>,
    tagger: Arc<dyn PosTagger>,
}

impl TagPipeline {
    pub fn new(fetch: FetchClient) -> Self {
        Self::with_parts(fetch, Arc::new(HtmlExtractor), Arc::new(LexiconTagger))
    }

    pub fn with_parts(fetch: FetchClient, extractor: Arc<dyn Extractor>, tagger: Arc<dyn PosTagger>) -> Self {
        Self { fetch, extractor, tagger }
    }

    /// Build the default pipeline from application config.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        Ok(Self::new(FetchClient::new(FetchConfig::from(config))?))
    }

    /// Fetch `url` and produce its tags.
    ///
    /// A blank url is reported as [`Error::NoLinkFound`] without touching
    /// the network.
    pub async fn create_tags(&self, url: &str) -> Result<TagList, Error> {
        if url.trim().is_empty() {
            return Err(Error::NoLinkFound);
        }

        let response = self.fetch.fetch(url).await?;
        let tags = self.tags_for_html(&response.bytes, response.content_type.as_deref())?;

        tracing::debug!(url = %response.final_url, tags = tags.len(), "tagged page");
        Ok(tags)
    }

    /// Tag an already-retrieved page. `content_type` carries the charset
    /// when the page came over HTTP.
    pub fn tags_for_html(&self, html: &[u8], content_type: Option<&str>) -> Result<TagList, Error> {
        let page = self.extractor.extract(html, content_type)?;
        Ok(tags_for_page(&page, self.tagger.as_ref()))
    }
}
