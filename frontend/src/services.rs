//! Static service catalogue shared by the services pages, the home preview
//! and the footer.

use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub short_title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
    /// Dedicated page, if the service has one.
    pub detail: Option<Route>,
}

impl Service {
    /// Where "Learn More" goes. Services without their own page point at the
    /// overview.
    pub fn route(&self) -> Route {
        self.detail.clone().unwrap_or(Route::Services)
    }
}

pub static SERVICES: &[Service] = &[
    Service {
        title: "Aerial Marketing & Real Estate",
        short_title: "Aerial Marketing",
        summary: "Stunning property showcases, marketing content, and listing photography that elevates real estate presentations.",
        features: &["Property Showcases", "Marketing Videos", "Virtual Tours", "Listing Photography"],
        image: "/img/aerial-marketing.jpg",
        detail: Some(Route::AerialMarketing),
    },
    Service {
        title: "Inspections & Construction Monitoring",
        short_title: "Inspections",
        summary: "Comprehensive construction progress tracking, infrastructure inspections, and Teams/Zoom workflow integration.",
        features: &["Progress Monitoring", "Infrastructure Inspection", "Remote Collaboration", "Compliance Documentation"],
        image: "/img/inspections.jpg",
        detail: Some(Route::Inspections),
    },
    Service {
        title: "Mapping & Site Visualization",
        short_title: "Mapping & Visualization",
        summary: "Precise orthomosaics, site overlays, and detailed mapping for planning, analysis, and documentation.",
        features: &["Orthomosaic Maps", "Site Overlays", "Topographic Analysis", "Progress Visualization"],
        image: "/img/mapping.jpg",
        detail: None,
    },
    Service {
        title: "Legal & Investigative",
        short_title: "Legal & Investigative",
        summary: "Evidence-ready imagery with proper metadata, chain-of-custody documentation, and legal compliance.",
        features: &["Evidence Documentation", "Chain of Custody", "Legal Compliance", "Expert Testimony Support"],
        image: "/img/legal.jpg",
        detail: None,
    },
    Service {
        title: "Studio: Macro / Food / Product / Fine-Art",
        short_title: "Studio Photography",
        summary: "Professional studio photography for products, food, macro work, and fine-art applications.",
        features: &["Product Photography", "Food Styling", "Macro Photography", "Fine-Art Prints"],
        image: "/img/studio.jpg",
        detail: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub static PROCESS: &[ProcessStep] = &[
    ProcessStep { title: "Scope", description: "Define project requirements and objectives" },
    ProcessStep { title: "Plan", description: "Develop detailed execution strategy" },
    ProcessStep { title: "Capture", description: "Execute imaging with precision" },
    ProcessStep { title: "Post", description: "Professional editing and enhancement" },
    ProcessStep { title: "Handoff", description: "Deliver client-ready assets" },
];

/// Two-digit step badge, starting at "01".
pub fn step_badge(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Services that have their own page, in catalogue order. These are the
/// entries of the nav's services menu.
pub fn detail_pages() -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(|service| service.detail.is_some())
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::*;

    #[test]
    fn services_without_a_page_link_to_the_overview() {
        let routes: Vec<Route> = SERVICES.iter().map(Service::route).collect();
        assert_eq!(
            routes,
            vec![
                Route::AerialMarketing,
                Route::Inspections,
                Route::Services,
                Route::Services,
                Route::Services,
            ]
        );
    }

    #[test]
    fn detail_pages_live_under_services() {
        let paths: Vec<String> = detail_pages().map(|service| service.route().to_path()).collect();
        assert_eq!(paths, ["/services/aerial-marketing", "/services/inspections"]);
    }

    #[test]
    fn detail_paths_resolve_back_to_their_route() {
        assert_eq!(Route::recognize("/services/aerial-marketing"), Some(Route::AerialMarketing));
        assert_eq!(Route::recognize("/services/inspections"), Some(Route::Inspections));
    }

    #[test]
    fn process_runs_scope_to_handoff_with_padded_badges() {
        let steps: Vec<(String, &str)> = PROCESS
            .iter()
            .enumerate()
            .map(|(i, step)| (step_badge(i), step.title))
            .collect();
        assert_eq!(
            steps,
            [
                ("01".to_string(), "Scope"),
                ("02".to_string(), "Plan"),
                ("03".to_string(), "Capture"),
                ("04".to_string(), "Post"),
                ("05".to_string(), "Handoff"),
            ]
        );
    }
}
