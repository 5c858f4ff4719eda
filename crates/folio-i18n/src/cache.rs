//! Session-lifetime content cache
//!
//! Successful loads are kept until the page unloads: entries are never evicted
//! or refreshed. Failures are not cached, so the next population retries them.

use crate::error::ContentError;
use crate::resource::{parse_record, AboutContent, ProjectContent};
use crate::source::ContentSource;
use folio_common::ProjectId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Path of the about-section content file.
pub const ABOUT_FILE: &str = "about.json";

/// Parsed content, loaded through a [`ContentSource`] on first use.
pub struct ContentCache {
    source: Rc<dyn ContentSource>,
    about: RefCell<Option<Rc<AboutContent>>>,
    projects: RefCell<HashMap<ProjectId, Rc<ProjectContent>>>,
}

impl ContentCache {
    /// Creates an empty cache over `source`.
    pub fn new(source: Rc<dyn ContentSource>) -> Self {
        Self {
            source,
            about: RefCell::new(None),
            projects: RefCell::new(HashMap::new()),
        }
    }

    /// About-section content.
    pub async fn about(&self) -> Result<Rc<AboutContent>, ContentError> {
        let cached = self.about.borrow().clone();
        if let Some(about) = cached {
            debug!("About content served from cache");
            return Ok(about);
        }

        let text = self.source.fetch(ABOUT_FILE).await?;
        let about = Rc::new(parse_record::<AboutContent>(ABOUT_FILE, &text)?);

        // A concurrent load may have landed first; keep whichever arrived first.
        let mut slot = self.about.borrow_mut();
        Ok(Rc::clone(slot.get_or_insert(about)))
    }

    /// Content of the project `id`.
    pub async fn project(&self, id: &ProjectId) -> Result<Rc<ProjectContent>, ContentError> {
        let cached = self.projects.borrow().get(id).cloned();
        if let Some(project) = cached {
            debug!("Project {} served from cache", id);
            return Ok(project);
        }

        let path = id.content_file();
        let text = self.source.fetch(&path).await?;
        let project = Rc::new(parse_record::<ProjectContent>(&path, &text)?);

        let mut projects = self.projects.borrow_mut();
        Ok(Rc::clone(projects.entry(id.clone()).or_insert(project)))
    }

    /// Whether about content has been loaded.
    pub fn has_about(&self) -> bool {
        self.about.borrow().is_some()
    }

    /// Number of cached project records.
    pub fn cached_projects(&self) -> usize {
        self.projects.borrow().len()
    }
}
