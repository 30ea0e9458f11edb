//! Sample content the server boots with. Matches what the marketing site
//! shows before an administrator has created anything; id counters continue
//! above the seeded ids.

use models::blog::{BlogPost, BlogStatus};
use models::proposal::{Proposal, ProposalStatus};

pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "10 Essential Website Features Every Business Needs in 2024".into(),
            excerpt: "Discover the must-have features that make websites successful and drive conversions for modern businesses.".into(),
            content: "<p>In today's digital landscape, having a website isn't enough—you need a website that converts visitors into customers...</p>".into(),
            author: "John Smith".into(),
            category: "Web Design".into(),
            image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400".into(),
            read_time: "5 min read".into(),
            date: "2024-01-15".into(),
            status: BlogStatus::Published,
            views: 1250,
        },
        BlogPost {
            id: 2,
            title: "How AI Chatbots Can Increase Your Website Conversions by 300%".into(),
            excerpt: "Learn how implementing AI chatbots on your website can dramatically improve customer engagement and sales.".into(),
            content: "<p>Artificial Intelligence has revolutionized customer service, and AI chatbots are leading the charge...</p>".into(),
            author: "Sarah Johnson".into(),
            category: "AI Technology".into(),
            image: "https://images.unsplash.com/photo-1531482615713-2afd69097998?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400".into(),
            read_time: "7 min read".into(),
            date: "2024-01-10".into(),
            status: BlogStatus::Published,
            views: 890,
        },
    ]
}

pub fn sample_proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: 1,
            name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            business_type: "E-commerce".into(),
            budget: "$2,500 - $5,000".into(),
            requirements: "Need a complete e-commerce website with payment integration, inventory management, and customer portal. Looking for modern design with mobile optimization.".into(),
            status: ProposalStatus::Pending,
            date: "2024-01-15".into(),
        },
        Proposal {
            id: 2,
            name: "Sarah Johnson".into(),
            email: "sarah@company.com".into(),
            phone: "+1 (555) 234-5678".into(),
            business_type: "Professional Services".into(),
            budget: "$1,000 - $2,500".into(),
            requirements: "Professional website for consulting firm. Need contact forms, service pages, team profiles, and blog functionality.".into(),
            status: ProposalStatus::Reviewed,
            date: "2024-01-14".into(),
        },
    ]
}
