//! Application context: resolved configuration plus wired storage backends.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{catalog, AssessmentMode, Catalog, Language};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TelarError};
use crate::extraction::{BusinessExtractor, HttpExtractor};
use crate::progress::{FileStore, HttpRemote, LocalProgress, RemoteTier};
use crate::session::{AssessmentSession, SessionConfig, SessionObserver};

pub struct AppContext {
    pub config: Config,
    pub user_id: String,
    pub language: Language,
    pub mode: AssessmentMode,
    pub robot_mode: bool,
    pub quiet: bool,
    data_dir: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        if let Some(dir) = &cli.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }

        let language: Language = cli
            .lang
            .as_deref()
            .unwrap_or(&config.assessment.language)
            .parse()
            .map_err(TelarError::Config)?;
        let mode: AssessmentMode = cli
            .mode
            .as_deref()
            .unwrap_or(&config.assessment.mode)
            .parse()
            .map_err(TelarError::Config)?;

        let data_dir = config.storage.resolve_data_dir()?;

        Ok(Self {
            config,
            user_id: cli.user.clone(),
            language,
            mode,
            robot_mode: cli.robot,
            quiet: cli.quiet,
            data_dir,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        catalog(self.language, self.mode)
    }

    pub fn local_progress(&self) -> Result<LocalProgress<FileStore>> {
        Ok(LocalProgress::new(FileStore::new(&self.data_dir)?))
    }

    pub fn remote_tier(&self) -> Result<Option<Arc<dyn RemoteTier + Sync>>> {
        if !self.config.remote.enabled {
            return Ok(None);
        }
        let token = self.config.remote.token()?;
        let remote = HttpRemote::new(&self.config.remote.base_url, &token)?;
        Ok(Some(Arc::new(remote)))
    }

    pub fn extractor(&self) -> Result<Option<Box<dyn BusinessExtractor>>> {
        if !self.config.extraction.enabled {
            return Ok(None);
        }
        let endpoint = self
            .config
            .extraction
            .endpoint
            .clone()
            .unwrap_or_else(|| self.config.remote.base_url.clone());
        let token = self.config.remote.token().ok();
        let extractor = HttpExtractor::new(&endpoint, token.as_deref())?;
        Ok(Some(Box::new(extractor)))
    }

    /// Open a fully wired session for the context's user.
    pub fn open_session<O: SessionObserver>(
        &self,
        observer: O,
    ) -> Result<AssessmentSession<FileStore, O>> {
        let mut session_config = SessionConfig::new(&self.user_id, self.language, self.mode);
        session_config.remote_flush_every = self.config.assessment.remote_flush_every;
        session_config.retry = self.config.remote.retry();

        AssessmentSession::start(
            session_config,
            self.catalog(),
            self.local_progress()?,
            self.remote_tier()?,
            self.extractor()?,
            observer,
        )
    }
}
