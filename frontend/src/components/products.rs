use yew::prelude::*;

struct Product {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    features: [&'static str; 4],
}

const PRODUCTS: [Product; 3] = [
    Product {
        title: "WiseAdvices AI",
        description: "AI Advices you with the best possible way and best practices on respective topics",
        image: "/assets/wiseadvices-landing-page.svg",
        features: [
            "Parenting Advices",
            "Career Advices",
            "Business Strategy Advices",
            "Personal Development Advices",
        ],
    },
    Product {
        title: "AI Powered CRM",
        description: "AI powered Customer management system with cloud database and seamless integration",
        image: "/assets/product-automation.svg",
        features: [
            "AI CRM Platform",
            "AI CRM Database",
            "AI CRM Integration",
            "AI CRM Security",
        ],
    },
    Product {
        title: "AI Powered Employee Management",
        description: "AI powered Employee management system with cloud database and seamless integration",
        image: "/assets/product-automation.svg",
        features: [
            "AI Employee Management Platform",
            "AI Employee Management Suggestions",
            "AI Employee Management Integration",
            "AI Powered Recruiting",
        ],
    },
];

#[function_component(ProductShowcase)]
pub fn product_showcase() -> Html {
    html! {
        <section id="showcase" class="showcase-section">
            <style>
                {r#"
                    .showcase-section {
                        background: #f9fafb;
                        padding: 5rem 1rem;
                    }
                    .showcase-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .showcase-header h2 {
                        font-size: 2.5rem;
                        font-weight: bold;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .showcase-header p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .showcase-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .product-card {
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                        overflow: hidden;
                        transition: transform 0.3s;
                    }
                    .product-card:hover {
                        transform: translateY(-5px);
                    }
                    .product-card img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                    }
                    .product-body {
                        padding: 1.5rem;
                    }
                    .product-body h3 {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #111827;
                        margin-bottom: 0.75rem;
                    }
                    .product-body p {
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .product-body ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .product-body li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #374151;
                        margin-bottom: 0.75rem;
                    }
                    .product-body li::before {
                        content: '\2713';
                        color: #16a34a;
                        font-weight: bold;
                    }
                    @media (max-width: 1024px) {
                        .showcase-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 768px) {
                        .showcase-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="showcase-header">
                <h2>{"Our Solutions"}</h2>
                <p>{"Discover how our AI-powered solutions can revolutionize your business operations"}</p>
            </div>
            <div class="showcase-grid">
                { for PRODUCTS.iter().map(|product| html! {
                    <div class="product-card">
                        <img src={product.image} alt={product.title} />
                        <div class="product-body">
                            <h3>{product.title}</h3>
                            <p>{product.description}</p>
                            <ul>
                                { for product.features.iter().map(|feature| html! {
                                    <li>{*feature}</li>
                                }) }
                            </ul>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
