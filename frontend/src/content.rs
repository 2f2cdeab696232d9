//! Static copy for the landing page.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub dark: bool,
    pub tags: [&'static str; 2],
    pub description: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub avatar: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Social {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "kitchens",
        title: "Kitchens",
        description: "At LifetimeArt, we design and build stunning kitchens tailored to your style and needs. Whether you prefer sleek modern lines or a timeless, classic look, our team delivers premium craftsmanship, functional layouts, and meticulous attention to detail, creating a kitchen you'll love to cook and gather in.",
    },
    Service {
        slug: "loft",
        title: "Loft Conversions",
        description: "Transform unused loft space into a beautiful, practical part of your home. From cozy bedrooms to bright home offices, we handle everything from structural adjustments to finishing touches, ensuring your new space is safe, stylish, and seamlessly integrated with your existing home.",
    },
    Service {
        slug: "bathrooms",
        title: "Bathrooms",
        description: "We create bathrooms that balance relaxation and practicality, with designs ranging from spa-inspired retreats to minimalist, functional spaces. Our team sources high-quality fixtures and finishes, ensuring durability, elegance, and comfort for years to come.",
    },
    Service {
        slug: "extensions",
        title: "Extensions",
        description: "Expand your living space without compromising on style. Whether it's a kitchen extension, a new family room, or an entire additional floor, we work closely with you to design and build an extension that complements your home and adds value.",
    },
    Service {
        slug: "restorations",
        title: "Restorations",
        description: "Preserve the charm of your property while upgrading it for modern living. Our restoration work combines traditional craftsmanship with modern techniques to breathe new life into historic or worn-down spaces.",
    },
    Service {
        slug: "external",
        title: "External Works",
        description: "Enhance the beauty and functionality of your outdoor areas. From garden landscaping to patios, pathways, and exterior lighting, we create inviting spaces that connect your home to nature.",
    },
];

/// Service shown when every accordion row is collapsed.
pub const FALLBACK_SERVICE: &str = "kitchens";
pub const GLOBAL_SERVICE_IMAGE: &str = "/images/services-kitchens.jpg";

pub fn service_image(slug: &str) -> Option<&'static str> {
    match slug {
        "kitchens" => Some("/images/works/Kitchen.png"),
        "loft" => Some("/images/works/LoftConversions.png"),
        "bathrooms" => Some("/images/works/Bathroom.png"),
        "extensions" => Some("/images/works/Extension.png"),
        "restorations" => Some("/images/works/Restoration.png"),
        "external" => Some("/images/works/ExternalWorks.png"),
        _ => None,
    }
}

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What area are you based in?",
        answer: "We primarily serve London and the surrounding areas, but depending on the project, we can travel further. Contact us to discuss your location and requirements.",
    },
    Faq {
        question: "How long does a typical project take?",
        answer: "Project timelines vary depending on size and complexity. We'll provide an estimated schedule during your consultation and keep you updated throughout the process.",
    },
    Faq {
        question: "Do you offer free quotes?",
        answer: "Yes, we offer free, no-obligation quotes. Our team will visit your property, assess your needs, and provide a detailed breakdown.",
    },
    Faq {
        question: "Will I need planning permission for my project?",
        answer: "This depends on the type and scope of your project. We can guide you through local regulations and help with applications if needed.",
    },
    Faq {
        question: "Do you provide a guarantee for your work?",
        answer: "Absolutely. All of our work is backed by a guarantee for quality and durability, giving you peace of mind.",
    },
    Faq {
        question: "Can I stay in my home while the work is being done?",
        answer: "In most cases, yes, though it may depend on the scope of work and areas affected. We'll discuss options to minimise disruption.",
    },
    Faq {
        question: "How do I get started with a project?",
        answer: "Simply get in touch with our team. We'll arrange a consultation, discuss your ideas, and prepare a tailored plan and quote.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "modern-kitchen",
        title: "Modern kitchen refit",
        image: "/images/works/works1.png",
        dark: false,
        tags: ["Kitchen", "4 weeks"],
        description: "This kitchen transformation brought sleek, modern design and enhanced functionality to our client's home. We installed custom cabinetry, high-quality worktops, and state-of-the-art appliances, creating a stylish yet practical space perfect for cooking and entertaining. With attention to every detail, we delivered a kitchen that balances aesthetics and usability.",
        quote: "LifetimeArt completely transformed our kitchen, making it both beautiful and highly functional. The craftsmanship was outstanding, and the team was professional and communicative throughout. We couldn't be happier with the result!",
        author: "Rachel Morgan",
        avatar: Some("/images/works/avatar1.png"),
    },
    Project {
        slug: "garden-path",
        title: "External garden path build",
        image: "/images/works/works2.png",
        dark: true,
        tags: ["External Works", "6 weeks"],
        description: "Our team designed and built a durable, visually appealing garden path to enhance the outdoor space. Using premium materials, we created a seamless walkway that blends naturally with the landscape, providing both functionality and aesthetic charm. The result is a stylish, well-crafted path that elevates the overall garden design.",
        quote: "The team at LifetimeArt did an amazing job on our garden path. It's sturdy, looks fantastic, and has completely transformed our outdoor space. They listened to our vision and delivered exactly what we wanted. Highly recommended!",
        author: "Michael Turner",
        avatar: Some("/images/works/avatar2.png"),
    },
    Project {
        slug: "bathroom-renovation",
        title: "Bathroom renovation",
        image: "/images/works/works3.png",
        dark: false,
        tags: ["Kitchen", "4 weeks"],
        description: "We revitalized this bathroom with a fresh, modern design, incorporating high-end tiling, sleek fixtures, and efficient lighting. The layout was optimized to maximize space, creating a luxurious and relaxing atmosphere. The final result is a beautifully crafted bathroom that enhances both comfort and functionality.",
        quote: "LifetimeArt delivered a stunning bathroom that feels luxurious and practical. The finish is exceptional, and the process was smooth from start to finish.",
        author: "Laura Davies",
        avatar: Some("/images/works/avatar3.png"),
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Emily Carter",
        role: "Homeowner",
        quote: "Brilliant service from start to finish. The team was professional, communicative, and the results exceeded my expectations. My new bathroom looks amazing!",
        avatar: Some("/images/works/avatar1.png"),
    },
    Testimonial {
        name: "Emily Carter",
        role: "Homeowner",
        quote: "I couldn't be happier with my loft conversion. The attention to detail and quality of work were outstanding. Refit made the whole process smooth and stress-free!",
        avatar: Some("/images/works/avatar1.png"),
    },
    Testimonial {
        name: "Emily Carter",
        role: "Homeowner",
        quote: "Refit transformed our outdoor space with a beautiful garden path. The work was completed on time, and the finish is excellent. A great team to work with!",
        avatar: Some("/images/works/avatar1.png"),
    },
    Testimonial {
        name: "Emily Carter",
        role: "Homeowner",
        quote: "I couldn't be happier with my loft conversion. The attention to detail and quality of work were outstanding. Refit made the whole process smooth and stress-free!",
        avatar: None,
    },
];

pub const ABOUT_IMAGES: &[&str] = &[
    "/images/about/image1.png",
    "/images/about/image2.png",
    "/images/about/image3.png",
    "/images/about/image4.png",
    "/images/about/image5.png",
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "8",
        label: "Years experience",
        detail: "Improving homes with expert craftsmanship for years",
    },
    Stat {
        value: "26",
        label: "Projects completed",
        detail: "Over 250 successful projects delivered with quality and care",
    },
    Stat {
        value: "30",
        label: "Skilled Tradespeople",
        detail: "Our team of 30 experts ensures top-quality results",
    },
    Stat {
        value: "100%",
        label: "Client satisfaction",
        detail: "All of our clients are satisfied with our work and service",
    },
];

pub const HEADER_NAV: &[NavLink] = &[
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#work", label: "Our work" },
    NavLink { href: "#faqs", label: "FAQs" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const FOOTER_NAV: &[NavLink] = &[
    NavLink { href: "#about", label: "About us" },
    NavLink { href: "#work", label: "Our work" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#testimonials", label: "Testimonials" },
    NavLink { href: "#faqs", label: "FAQs" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const SOCIALS: &[Social] = &[
    Social { name: "Instagram", icon: "/images/contact/instagram.svg", href: "#" },
    Social { name: "TikTok", icon: "/images/contact/tiktok.svg", href: "#" },
    Social { name: "X", icon: "/images/contact/x.svg", href: "#" },
];

pub const HEADLINE: &[&str] = &["Your trusted partner", "for quality home", "improvement"];

pub const OFFICE_ADDRESS: &str = "150 Old Park Ln, London W1K 1QZ";
pub const CONTACT_EMAIL: &str = "hello@refit.com";
pub const CONTACT_PHONE: &str = "07716 534984";

/// Items repeated twice back to back, so a CSS marquee translating by -50%
/// loops without a visible seam.
pub fn marquee_loop<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_an_image() {
        for service in SERVICES {
            assert!(service_image(service.slug).is_some(), "{}", service.slug);
        }
        assert!(find_service(FALLBACK_SERVICE).is_some());
        assert_eq!(service_image("garage"), None);
    }

    #[test]
    fn marquee_loop_repeats_in_order() {
        let looped = marquee_loop(&ABOUT_IMAGES[..2]);
        assert_eq!(looped, vec![ABOUT_IMAGES[0], ABOUT_IMAGES[1], ABOUT_IMAGES[0], ABOUT_IMAGES[1]]);
        assert!(marquee_loop::<u8>(&[]).is_empty());
    }

    #[test]
    fn faq_questions_are_unique() {
        for (i, faq) in FAQS.iter().enumerate() {
            assert!(FAQS[i + 1..].iter().all(|other| other.question != faq.question));
        }
    }
}
