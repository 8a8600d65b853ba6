// Shared test helpers: in-memory DNS and whois sources.
//
// Lets the pipeline run end to end without touching the network.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use whoispf::dns::TxtResolver;
use whoispf::whois::WhoisLookup;
use whoispf::LookupError;

/// TXT records served from a map. Unknown domains have no records.
#[derive(Default)]
pub struct StaticZone {
    records: HashMap<String, Vec<String>>,
}

impl StaticZone {
    pub fn with(mut self, domain: &str, txt: &[&str]) -> Self {
        self.records.insert(
            domain.to_string(),
            txt.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl TxtResolver for StaticZone {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.records.get(domain).cloned().unwrap_or_default())
    }
}

/// Whois answers served from a map; queries not in the map (or marked
/// unreachable) fail as unreachable. Every query is recorded.
#[derive(Default)]
pub struct StaticWhois {
    responses: HashMap<String, String>,
    unreachable: HashSet<String>,
    queries: RefCell<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl StaticWhois {
    pub fn with(mut self, query: &str, response: &str) -> Self {
        self.responses
            .insert(query.to_string(), response.to_string());
        self
    }

    pub fn unreachable(mut self, query: &str) -> Self {
        self.unreachable.insert(query.to_string());
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl WhoisLookup for StaticWhois {
    async fn whois(&self, query: &str) -> Result<String, LookupError> {
        self.queries.borrow_mut().push(query.to_string());
        match self.responses.get(query) {
            Some(response) if !self.unreachable.contains(query) => Ok(response.clone()),
            _ => Err(LookupError::Whois {
                query: query.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// A minimal RIPE-style response.
#[allow(dead_code)]
pub fn ripe_response(netname: &str, org: &str, country: &str) -> String {
    format!(
        "inetnum:  192.0.2.0 - 192.0.2.255\nnetname:  {netname}\ncountry:  {country}\n\norg-name: {org}\naddress:  Example Street 1\n"
    )
}
