// API client module: a small blocking HTTP client for the creator registry.
// Every call is a single request; non-200 responses are reported on stdout
// and turned into an empty result, while transport failures propagate.

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, REFERER};
use reqwest::{Method, StatusCode};

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::{Creator, CreatorName, Video};

pub const AUTH_USER_PATH: &str = "/ws/v1/auth-user";
pub const CREATOR_COLLECTION_PATH: &str = "/ws/v1/rest/creator/";
pub const CSRF_COOKIE: &str = "csrftoken";
// The registry reads this as `X-CSRFToken`; header names are case-insensitive.
pub const CSRF_HEADER: &str = "x-csrftoken";

/// Blocking client for the creator registry. The CSRF token is not cached:
/// every mutating call fetches a fresh one first.
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            warn!(
                "TLS certificate verification is disabled for {}",
                config.origin()
            );
        }
        let client = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, config })
    }

    fn creator_path(id: &str) -> String {
        format!("{}{}", CREATOR_COLLECTION_PATH, id)
    }

    /// Referer and JSON content type, shared by every registry call.
    fn base_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_str(&self.config.origin())?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Base headers plus a freshly minted CSRF token. A missing token is
    /// sent as an empty header value and left for the server to reject.
    fn mutating_headers(&self) -> Result<HeaderMap> {
        let token = self.get_csrf_token()?.unwrap_or_default();
        let mut headers = self.base_headers()?;
        headers.insert(
            CSRF_HEADER,
            HeaderValue::from_str(&token).context("CSRF token is not a valid header value")?,
        );
        Ok(headers)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    fn send(req: RequestBuilder, what: &str) -> Result<Response> {
        req.send()
            .with_context(|| format!("Failed to send {} request", what))
    }

    /// GET the auth-user endpoint and pull the `csrftoken` cookie out of a
    /// 200 response. Any other status yields `None`.
    pub fn get_csrf_token(&self) -> Result<Option<String>> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_str(&self.config.origin())?);
        let res = Self::send(
            self.request(Method::GET, AUTH_USER_PATH).headers(headers),
            "auth-user",
        )?;
        if res.status() != StatusCode::OK {
            debug!("auth-user returned {}, no CSRF token", res.status());
            return Ok(None);
        }
        let token = res
            .cookies()
            .find(|c| c.name() == CSRF_COOKIE)
            .map(|c| c.value().to_string());
        debug!("CSRF token present: {}", token.is_some());
        Ok(token)
    }

    /// List creators, printing one line per record. Returns the parsed list,
    /// or an empty one when the registry answers with anything but 200.
    pub fn get_creators(&self) -> Result<Vec<Creator>> {
        let res = Self::send(
            self.request(Method::GET, CREATOR_COLLECTION_PATH)
                .headers(self.base_headers()?),
            "list creators",
        )?;
        if res.status() != StatusCode::OK {
            println!(
                "Failed to retrieve creators. Status code: {}",
                res.status().as_u16()
            );
            return Ok(Vec::new());
        }
        let creators: Vec<Creator> = res.json().context("Parsing creator list json")?;
        for creator in &creators {
            println!(
                "Creator ID: {}, Name: {}",
                creator.display_id(),
                creator.display_name()
            );
        }
        Ok(creators)
    }

    /// POST a new creator. Issues exactly one POST; no lookup for an
    /// existing creator of the same name is made.
    pub fn create_creator(&self, name: &str) -> Result<Option<Creator>> {
        let headers = self.mutating_headers()?;
        let res = Self::send(
            self.request(Method::POST, CREATOR_COLLECTION_PATH)
                .headers(headers)
                .json(&CreatorName { name }),
            "create creator",
        )?;
        if res.status() != StatusCode::OK {
            println!(
                "Failed to create creator. Status code: {}",
                res.status().as_u16()
            );
            return Ok(None);
        }
        let creator: Creator = res.json().context("Parsing created creator json")?;
        println!(
            "Created Creator - ID: {}, Name: {}",
            creator.display_id(),
            creator.display_name()
        );
        Ok(Some(creator))
    }

    pub fn get_creator_by_id(&self, creator_id: &str) -> Result<Option<Creator>> {
        let res = Self::send(
            self.request(Method::GET, &Self::creator_path(creator_id))
                .headers(self.base_headers()?),
            "get creator",
        )?;
        if res.status() != StatusCode::OK {
            println!(
                "Failed to retrieve creator. Status code: {}",
                res.status().as_u16()
            );
            return Ok(None);
        }
        let creator: Creator = res.json().context("Parsing creator json")?;
        println!(
            "Creator ID: {}, Name: {}",
            creator.display_id(),
            creator.display_name()
        );
        Ok(Some(creator))
    }

    /// PUT a new name. The registry takes the replacement on the collection
    /// endpoint, so `creator_id` only shows up in the debug log.
    pub fn replace_creator(&self, creator_id: &str, new_name: &str) -> Result<Option<Creator>> {
        debug!("replacing creator {}", creator_id);
        let headers = self.mutating_headers()?;
        let res = Self::send(
            self.request(Method::PUT, CREATOR_COLLECTION_PATH.trim_end_matches('/'))
                .headers(headers)
                .json(&CreatorName { name: new_name }),
            "replace creator",
        )?;
        if res.status() != StatusCode::OK {
            println!(
                "Failed to replace creator. Status code: {}",
                res.status().as_u16()
            );
            return Ok(None);
        }
        let creator: Creator = res.json().context("Parsing replaced creator json")?;
        println!("Creator replaced successfully.");
        println!(
            "New creator information: ID: {}, Name: {}",
            creator.display_id(),
            creator.display_name()
        );
        Ok(Some(creator))
    }

    /// PATCH a creator's name. Prints nothing; `None` on any non-200 status.
    pub fn update_creator(&self, creator_id: &str, name: &str) -> Result<Option<Creator>> {
        let headers = self.mutating_headers()?;
        let res = Self::send(
            self.request(Method::PATCH, &Self::creator_path(creator_id))
                .headers(headers)
                .json(&CreatorName { name }),
            "update creator",
        )?;
        if res.status() != StatusCode::OK {
            debug!("update of creator {} returned {}", creator_id, res.status());
            return Ok(None);
        }
        let creator = res.json().context("Parsing updated creator json")?;
        Ok(Some(creator))
    }

    /// DELETE a creator. `true` only for a 200 response.
    pub fn delete_creator(&self, creator_id: &str) -> Result<bool> {
        let headers = self.mutating_headers()?;
        let res = Self::send(
            self.request(Method::DELETE, &Self::creator_path(creator_id))
                .headers(headers),
            "delete creator",
        )?;
        debug!("delete of creator {} returned {}", creator_id, res.status());
        Ok(res.status() == StatusCode::OK)
    }

    /// List a creator's videos, printing one summary line per video.
    pub fn get_videos(&self, creator_id: &str) -> Result<Vec<Video>> {
        let path = format!("{}/video", Self::creator_path(creator_id));
        let res = Self::send(
            self.request(Method::GET, &path).headers(self.base_headers()?),
            "list videos",
        )?;
        if res.status() != StatusCode::OK {
            println!(
                "Failed to get creator videos. Status code: {}",
                res.status().as_u16()
            );
            return Ok(Vec::new());
        }
        let videos: Vec<Video> = res.json().context("Parsing video list json")?;
        for video in &videos {
            println!("{}", video.summary());
        }
        Ok(videos)
    }

    pub fn create_videos(&self) -> Result<(), ClientError> {
        Err(ClientError::NotImplemented("create_videos"))
    }

    pub fn get_videos_id(&self) -> Result<(), ClientError> {
        Err(ClientError::NotImplemented("get_videos_id"))
    }

    pub fn replace_videos(&self) -> Result<(), ClientError> {
        Err(ClientError::NotImplemented("replace_videos"))
    }

    pub fn update_videos(&self) -> Result<(), ClientError> {
        Err(ClientError::NotImplemented("update_videos"))
    }

    pub fn delete_video(&self) -> Result<(), ClientError> {
        Err(ClientError::NotImplemented("delete_video"))
    }
}
