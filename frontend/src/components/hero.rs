use yew::prelude::*;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <div class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #111827, #000);
                    }
                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        background-image: url('/assets/grid.svg');
                        background-position: center;
                        opacity: 0.5;
                        mask-image: linear-gradient(180deg, white, rgba(255, 255, 255, 0));
                        -webkit-mask-image: linear-gradient(180deg, white, rgba(255, 255, 255, 0));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 3rem;
                    }
                    .hero-text {
                        flex: 1;
                    }
                    .hero-text h1 {
                        font-size: 3.5rem;
                        font-weight: bold;
                        color: #fff;
                        margin-bottom: 1.5rem;
                        line-height: 1.15;
                    }
                    .hero-text h1 span {
                        color: #2563eb;
                        display: block;
                    }
                    .hero-text p {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        margin-bottom: 2rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        background: #2563eb;
                        color: #fff;
                        font-weight: bold;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        transition: background 0.3s, transform 0.3s;
                    }
                    .hero-cta:hover {
                        background: #1d4ed8;
                        transform: scale(1.05);
                    }
                    .hero-image {
                        flex: 1;
                    }
                    .hero-image img {
                        width: 100%;
                        height: auto;
                    }
                    @media (max-width: 768px) {
                        .hero-content {
                            flex-direction: column;
                            text-align: center;
                            padding-top: 4rem;
                        }
                        .hero-text h1 {
                            font-size: 2.5rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-grid"></div>
            <div class="hero-content">
                <div class="hero-text">
                    <h1>
                        {"Transform Your Ideas Into Reality with"}
                        <span>{"YeahScene AI"}</span>
                    </h1>
                    <p>{"We bring cutting-edge AI solutions to power your business forward"}</p>
                    <a class="hero-cta" href="#contact">{"Get Started"}</a>
                </div>
                <div class="hero-image">
                    <img src="/assets/hero-image.svg" alt="AI Technology Illustration" />
                </div>
            </div>
        </div>
    }
}
