use yew::prelude::*;

struct Experience {
    year: &'static str,
    title: &'static str,
    description: &'static str,
}

const EXPERIENCES: [Experience; 2] = [
    Experience {
        year: "2025",
        title: "Launched AI Automation Services",
        description: "Introduced cutting-edge AI automation solutions to transform business operations.",
    },
    Experience {
        year: "2024",
        title: "Founded YeahScene AI",
        description: "Started with a vision to make AI automation accessible to businesses of all sizes.",
    },
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                    .about-section {
                        background: #fff;
                        padding: 5rem 1rem;
                    }
                    .about-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .about-header h2 {
                        font-size: 2.5rem;
                        font-weight: bold;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .about-header p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .about-profile {
                        max-width: 72rem;
                        margin: 0 auto 5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-profile img {
                        width: 100%;
                        height: 25rem;
                        object-fit: cover;
                        border-radius: 1rem;
                    }
                    .about-story h3 {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .about-story p {
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .about-details {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        color: #4b5563;
                    }
                    .about-details li {
                        margin-bottom: 1rem;
                    }
                    .timeline {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .timeline h3 {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #111827;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .timeline-items {
                        border-left: 1px solid #e5e7eb;
                        padding-left: 2rem;
                    }
                    .timeline-item {
                        position: relative;
                        margin-bottom: 3rem;
                    }
                    .timeline-item::before {
                        content: '';
                        position: absolute;
                        left: -2.5rem;
                        top: 0.25rem;
                        width: 1rem;
                        height: 1rem;
                        background: #2563eb;
                        border: 4px solid #fff;
                        border-radius: 50%;
                    }
                    .timeline-year {
                        color: #2563eb;
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .timeline-item h4 {
                        font-size: 1.125rem;
                        font-weight: bold;
                        color: #111827;
                        margin-bottom: 0.5rem;
                    }
                    .timeline-item p {
                        color: #4b5563;
                    }
                    @media (max-width: 768px) {
                        .about-profile {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="about-header">
                <h2>{"About YeahScene AI"}</h2>
                <p>{"Pioneering the future of business automation with innovative AI solutions"}</p>
            </div>
            <div class="about-profile">
                <img src="/assets/about-image.svg" alt="YeahScene AI Office" />
                <div class="about-story">
                    <h3>{"Our Story"}</h3>
                    <p>
                        {"YeahScene AI was founded with a clear mission: to make advanced AI \
                          automation accessible to businesses of all sizes. Our team of experts \
                          combines deep technical knowledge with practical business experience \
                          to deliver solutions that drive real results."}
                    </p>
                    <ul class="about-details">
                        <li>{"Salem, TN, India"}</li>
                        <li>{"niresh@yeahscene.com"}</li>
                        <li>{"+91 9488186900"}</li>
                    </ul>
                </div>
            </div>
            <div class="timeline">
                <h3>{"Our Journey"}</h3>
                <div class="timeline-items">
                    { for EXPERIENCES.iter().map(|experience| html! {
                        <div class="timeline-item">
                            <div class="timeline-year">{experience.year}</div>
                            <h4>{experience.title}</h4>
                            <p>{experience.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
