//! Page copy and icon paths.

use crate::navigation::Section;
use crate::tabs::SolutionTab;

const ICON_BULB: &str = "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z";
const ICON_BARS: &str = "M18 20L18 10M12 20L12 4M6 20L6 14";
const ICON_BOLT: &str = "M13 2L3 14h9l-1 8 10-12h-9l1-8z";
const ICON_CUBE: &str = "M21 16V8a2 2 0 00-1-1.73l-7-4a2 2 0 00-2 0l-7 4A2 2 0 003 8v8a2 2 0 001 1.73l7 4a2 2 0 002 0l7-4A2 2 0 0021 16zM3.27 6.96L12 12.01 20.73 6.96M12 22.08L12 12";
const ICON_PHONE: &str = "M5 2h14a2 2 0 012 2v16a2 2 0 01-2 2H5a2 2 0 01-2-2V4a2 2 0 012-2zM12 18h.01";
const ICON_PIE: &str = "M21.21 15.89A10 10 0 118 2.83M22 12A10 10 0 0012 2v10z";
const ICON_CHECK: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";

pub const COMPANY_NAME: &str = "LuaData";
pub const TAGLINE: &str = "AI • ML • Data Science";
pub const CONTACT_EMAIL: &str = "sales@luadata.net";

pub struct HeroCard {
    pub icon: &'static str,
    pub title: &'static str,
}

pub static HERO_CARDS: [HeroCard; 6] = [
    HeroCard { icon: ICON_BULB, title: "AI Models" },
    HeroCard { icon: ICON_BARS, title: "Analytics" },
    HeroCard { icon: ICON_BOLT, title: "Automation" },
    HeroCard { icon: ICON_CUBE, title: "Smart Apps" },
    HeroCard { icon: ICON_PHONE, title: "Mobile AI" },
    HeroCard { icon: ICON_PIE, title: "Predictions" },
];

/// Staggered float delay for the hero card at `index`.
pub fn hero_card_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.2)
}

pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub metrics: [Metric; 2],
}

pub static SERVICES: [Service; 6] = [
    Service {
        icon: ICON_BULB,
        title: "Machine Learning Models",
        description: "Custom ML algorithms and predictive models that learn from your data to automate decisions and forecast trends with precision.",
        metrics: [
            Metric { value: "95%", label: "Accuracy" },
            Metric { value: "Real-time", label: "Processing" },
        ],
    },
    Service {
        icon: ICON_CHECK,
        title: "AI Integration",
        description: "Seamlessly integrate artificial intelligence into your existing workflows to enhance productivity and unlock new capabilities.",
        metrics: [
            Metric { value: "60%", label: "Efficiency" },
            Metric { value: "24/7", label: "Automation" },
        ],
    },
    Service {
        icon: ICON_BARS,
        title: "Data Science Consulting",
        description: "Transform raw data into actionable insights with advanced analytics, statistical modeling, and data visualization.",
        metrics: [
            Metric { value: "10x", label: "Insights" },
            Metric { value: "Custom", label: "Solutions" },
        ],
    },
    Service {
        icon: ICON_CUBE,
        title: "AI-Powered Web Apps",
        description: "Interactive web applications that leverage machine learning to deliver intelligent user experiences and real-time insights.",
        metrics: [
            Metric { value: "Lightning", label: "Fast" },
            Metric { value: "Smart", label: "UI/UX" },
        ],
    },
    Service {
        icon: ICON_PHONE,
        title: "Smart Mobile Apps",
        description: "Mobile applications enhanced with AI capabilities like computer vision, natural language processing, and predictive analytics.",
        metrics: [
            Metric { value: "Native", label: "Performance" },
            Metric { value: "AI-First", label: "Design" },
        ],
    },
    Service {
        icon: ICON_BOLT,
        title: "Data Pipeline & MLOps",
        description: "Scalable data pipelines and ML operations infrastructure to automate model deployment and monitoring at scale.",
        metrics: [
            Metric { value: "Auto", label: "Deploy" },
            Metric { value: "Scale", label: "Ready" },
        ],
    },
];

pub struct SolutionFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 2],
}

pub struct Solution {
    pub tab: SolutionTab,
    pub heading: &'static str,
    pub features: [SolutionFeature; 3],
}

pub static SOLUTIONS: [Solution; 3] = [
    Solution {
        tab: SolutionTab::Predictive,
        heading: "Predictive Analytics Solutions",
        features: [
            SolutionFeature {
                title: "Sales Forecasting",
                description: "Predict future sales trends with 95%+ accuracy using advanced time series analysis and ensemble methods.",
                tags: ["95% Accuracy", "Real-time"],
            },
            SolutionFeature {
                title: "Customer Behavior Analysis",
                description: "Identify at-risk customers before they leave with machine learning models that analyze behavior patterns.",
                tags: ["Early Detection", "Behavioral AI"],
            },
            SolutionFeature {
                title: "Demand Planning",
                description: "Optimize inventory and supply chain with intelligent demand forecasting models.",
                tags: ["Supply Chain", "Optimization"],
            },
        ],
    },
    Solution {
        tab: SolutionTab::Automation,
        heading: "Intelligent Automation",
        features: [
            SolutionFeature {
                title: "Document Processing",
                description: "Automate document classification and data extraction using computer vision and NLP techniques.",
                tags: ["Computer Vision", "NLP"],
            },
            SolutionFeature {
                title: "Quality Control",
                description: "Implement automated quality inspection systems using image recognition and anomaly detection.",
                tags: ["Image Recognition", "Anomaly Detection"],
            },
            SolutionFeature {
                title: "Process Optimization",
                description: "Optimize business processes with reinforcement learning and intelligent workflow automation.",
                tags: ["Workflow AI", "Process Mining"],
            },
        ],
    },
    Solution {
        tab: SolutionTab::Analytics,
        heading: "Advanced Analytics",
        features: [
            SolutionFeature {
                title: "Customer Segmentation",
                description: "Discover hidden customer segments using unsupervised learning and clustering algorithms.",
                tags: ["Clustering", "Unsupervised ML"],
            },
            SolutionFeature {
                title: "Recommendation Systems",
                description: "Build personalized recommendation engines that increase engagement and sales.",
                tags: ["Personalization", "Deep Learning"],
            },
            SolutionFeature {
                title: "Real-time Analytics",
                description: "Process millions of data points in real-time to provide instant business insights and decision support.",
                tags: ["Real-time", "Big Data"],
            },
        ],
    },
];

pub fn solution_for(tab: SolutionTab) -> &'static Solution {
    match tab {
        SolutionTab::Predictive => &SOLUTIONS[0],
        SolutionTab::Automation => &SOLUTIONS[1],
        SolutionTab::Analytics => &SOLUTIONS[2],
    }
}

pub struct Technology {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub static TECHNOLOGIES: [Technology; 6] = [
    Technology {
        icon: "M14.31.18l.9.2.73.26.59.3.45.32.34.34.25.34.16.33.1.3.04.26.02.2-.01.13L16.17 9.5l.69-.88c.11-.14.24-.28.38-.42.35-.35.85-.64 1.5-.84L19.08 8l.8.33.66.45.49.56.35.66.17.76.02.85-.12.82-.25.8-.35.7-.42.55-.42.42-.4.3-.35.17-.28.07-.24.01L18.1 14.5l.9.11.85.26.78.45.7.62.6.8.48.96.36 1.08.25 1.18.15 1.25.07 1.28-.02 1.27-.1 1.23-.17 1.14-.25 1.02-.3.88-.33.72-.34.54-.32.36-.27.17-.2.05-.1.01-.13-.05L11.84 23l-.69.88c-.11.14-.24.28-.38.42-.35.35-.85.64-1.5.84L9.93 24l-.8-.33-.66-.45-.49-.56-.35-.66-.17-.76-.02-.85.12-.82.25-.8-.35.7-.42.55-.42.42-.4.3-.35.17-.28.07-.24.01L5.9 9.5l-.9-.11-.85-.26-.78-.45-.7-.62-.6-.8-.48-.96-.36-1.08-.25-1.18-.15-1.25-.07-1.28.02-1.27.1-1.23.17-1.14.25-1.02.3-.88.33-.72.34-.54.32-.36.27-.17.2-.05.1-.01.13.05L12.16 1l.69-.88c.11-.14.24-.28.38-.42.35-.35.85-.64 1.5-.84L14.31.18",
        name: "Python",
        description: "TensorFlow, PyTorch, scikit-learn",
    },
    Technology {
        icon: "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
        name: "Cloud ML",
        description: "AWS SageMaker, Google AI Platform",
    },
    Technology {
        icon: "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        name: "MLOps",
        description: "Docker, Kubernetes, MLflow",
    },
    Technology {
        icon: "M3 3v18h18V3H3zm16 16H5V5h14v14z",
        name: "Big Data",
        description: "Spark, Hadoop, Kafka",
    },
    Technology {
        icon: "M12 2L2 7v10c0 5.55 3.84 9.74 9 11 5.16-1.26 9-5.45 9-11V7l-10-5z",
        name: "React",
        description: "Next.js, TypeScript, Node.js",
    },
    Technology {
        icon: "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2z",
        name: "Database",
        description: "PostgreSQL, MongoDB, Redis",
    },
];

/// Carousel items, repeated once so the scrolling track loops without a gap.
pub fn carousel_items() -> impl Iterator<Item = &'static Technology> {
    TECHNOLOGIES.iter().chain(TECHNOLOGIES.iter())
}

pub struct Stat {
    pub icon: &'static str,
    /// Counter target; non-numeric values are displayed verbatim.
    pub target: &'static str,
    pub label: &'static str,
    pub fill_width: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { icon: ICON_BULB, target: "200", label: "ML Models Deployed", fill_width: "90" },
    Stat { icon: ICON_CHECK, target: "95", label: "Model Accuracy Rate", fill_width: "95" },
    Stat { icon: ICON_BARS, target: "50", label: "Data Science Projects", fill_width: "80" },
    Stat { icon: ICON_BOLT, target: "24/7", label: "AI Model Monitoring", fill_width: "100" },
];

pub struct ContactFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CONTACT_FEATURES: [ContactFeature; 3] = [
    ContactFeature { icon: ICON_BOLT, title: "Quick Response", description: "Get a response within 24 hours" },
    ContactFeature { icon: ICON_CHECK, title: "Custom Solutions", description: "Tailored to your specific needs" },
    ContactFeature { icon: ICON_PIE, title: "Proven Results", description: "Track record of successful projects" },
];

pub struct FooterLink {
    pub label: &'static str,
    pub target: Section,
}

pub static FOOTER_SERVICE_LINKS: [FooterLink; 5] = [
    FooterLink { label: "Machine Learning", target: Section::Services },
    FooterLink { label: "AI Integration", target: Section::Services },
    FooterLink { label: "Data Science", target: Section::Services },
    FooterLink { label: "Smart Apps", target: Section::Services },
    FooterLink { label: "MLOps", target: Section::MachineLearning },
];

pub static FOOTER_COMPANY_LINKS: [FooterLink; 3] = [
    FooterLink { label: "About Us", target: Section::About },
    FooterLink { label: "Our Solutions", target: Section::MachineLearning },
    FooterLink { label: "Contact", target: Section::Contact },
];

pub struct PhoneNumber {
    pub display: &'static str,
    pub dial: &'static str,
}

pub static PHONE_NUMBERS: [PhoneNumber; 2] = [
    PhoneNumber { display: "+1 (607) 608-7411", dial: "+16076087411" },
    PhoneNumber { display: "+92 (317) 459-2503", dial: "+923174592503" },
];

pub static OFFICES: [&str; 2] = [
    "WorkVille 39 St. Midtown Manhattan, NY",
    "Colabs Johar Town, Lahore, Pakistan",
];

pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        href: "https://www.linkedin.com/company/luadata/",
        label: "Connect on LinkedIn",
        icon: "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
    },
    SocialLink {
        href: "https://www.facebook.com/share/18vSNmE9Gc/",
        label: "Follow us on Facebook",
        icon: "M22.675 0H1.325C.593 0 0 .593 0 1.325v21.351C0 23.406.593 24 1.325 24h11.495v-9.294H9.691V11.01h3.129V8.414c0-3.1 1.893-4.788 4.659-4.788 1.325 0 2.464.099 2.797.143v3.24l-1.918.001c-1.504 0-1.794.715-1.794 1.763v2.31h3.587l-.467 3.696h-3.12V24h6.116C23.406 24 24 23.406 24 22.676V1.325C24 .593 23.406 0 22.675 0z",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterAnimation;

    #[test]
    fn every_tab_has_a_solution_panel() {
        for tab in SolutionTab::ALL {
            assert_eq!(solution_for(tab).tab, tab);
        }
    }

    #[test]
    fn only_text_stat_skips_the_counter() {
        let skipped = STATS
            .iter()
            .filter(|stat| CounterAnimation::parse(stat.target).is_none())
            .map(|stat| stat.target)
            .collect::<Vec<_>>();
        assert_eq!(skipped, vec!["24/7"]);
    }

    #[test]
    fn carousel_repeats_the_track_once() {
        assert_eq!(carousel_items().count(), TECHNOLOGIES.len() * 2);
    }

    #[test]
    fn hero_cards_stagger_by_fifth_of_a_second() {
        assert_eq!(hero_card_delay(0), "0.0s");
        assert_eq!(hero_card_delay(3), "0.6s");
    }
}
