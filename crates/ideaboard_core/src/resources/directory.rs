//! Static sponsor directory data and lookup.

use log::debug;

/// Kind of resource link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Docs,
    Repo,
    Support,
    Other,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Repo => "repo",
            Self::Support => "support",
            Self::Other => "other",
        }
    }

    /// Section heading for a group of resources of this kind.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Repo => "repos",
            Self::Support => "support",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
    pub kind: ResourceKind,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceCategory {
    pub kind: ResourceKind,
    pub items: &'static [Resource],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponsor {
    pub name: &'static str,
    /// Site-relative logo asset path.
    pub logo: Option<&'static str>,
    pub website: Option<&'static str>,
    pub categories: &'static [ResourceCategory],
}

impl Sponsor {
    /// Iterates every resource across categories.
    pub fn resources(&self) -> impl Iterator<Item = &'static Resource> {
        let categories: &'static [ResourceCategory] = self.categories;
        categories.iter().flat_map(|category| category.items.iter())
    }
}

const LIT_DOCS: &[Resource] = &[
    Resource {
        title: "Documentation",
        url: "https://developer.litprotocol.com/",
        kind: ResourceKind::Docs,
        description: Some("Official Lit Protocol documentation for developers"),
    },
    Resource {
        title: "Integration Guide",
        url: "https://developer.litprotocol.com/integration",
        kind: ResourceKind::Docs,
        description: Some("Step by step guide for integrating Lit Protocol"),
    },
];

const LIT_REPOS: &[Resource] = &[
    Resource {
        title: "Starter Template",
        url: "https://github.com/lit-protocol/starter-template",
        kind: ResourceKind::Repo,
        description: Some("Quick start template for building with Lit Protocol"),
    },
    Resource {
        title: "Example Projects",
        url: "https://github.com/lit-protocol/examples",
        kind: ResourceKind::Repo,
        description: Some("Collection of example projects using Lit Protocol"),
    },
];

const AI16Z_DOCS: &[Resource] = &[Resource {
    title: "Web3 Development Guide",
    url: "https://a16z.com/web3-dev-guide/",
    kind: ResourceKind::Docs,
    description: None,
}];

const SPONSORS: &[Sponsor] = &[
    Sponsor {
        name: "Lit Protocol",
        logo: Some("/sponsors/lit.png"),
        website: Some("https://litprotocol.com"),
        categories: &[
            ResourceCategory {
                kind: ResourceKind::Docs,
                items: LIT_DOCS,
            },
            ResourceCategory {
                kind: ResourceKind::Repo,
                items: LIT_REPOS,
            },
        ],
    },
    Sponsor {
        name: "ai16z",
        logo: Some("/sponsors/ai16z.jpg"),
        website: None,
        categories: &[ResourceCategory {
            kind: ResourceKind::Docs,
            items: AI16Z_DOCS,
        }],
    },
];

/// Returns the full sponsor directory.
pub fn sponsors() -> &'static [Sponsor] {
    SPONSORS
}

/// Returns sponsors matching `name` exactly, or all when `None`.
pub fn filter_sponsors(name: Option<&str>) -> Vec<&'static Sponsor> {
    let selected = match name {
        Some(name) => SPONSORS
            .iter()
            .filter(|sponsor| sponsor.name == name)
            .collect::<Vec<_>>(),
        None => SPONSORS.iter().collect(),
    };
    debug!(
        "event=sponsor_filter module=resources sponsor={} count={}",
        name.unwrap_or("all"),
        selected.len()
    );
    selected
}
