//! Landing Page
//!
//! Hero, about section, featured gallery, how-it-works steps and a call
//! to get started.

use leptos::*;
use leptos_router::*;

struct Featured {
    image: &'static str,
    title: &'static str,
    artist: &'static str,
}

const FEATURED: [Featured; 3] = [
    Featured {
        image: "/assets/girl-with-a-pearl-earring.png",
        title: "Girl with a Pearl Earring",
        artist: "Johannes Vermeer",
    },
    Featured {
        image: "/assets/the-scream.png",
        title: "The Scream",
        artist: "Edvard Munch",
    },
    Featured {
        image: "/assets/mona-lisa.png",
        title: "Mona Lisa",
        artist: "Leonardo Da Vinci",
    },
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        "/assets/icon-upload.png",
        "Upload your artwork",
        "Share your creations by uploading your artworks into your personal digital gallery",
    ),
    (
        "/assets/icon-organize.png",
        "Organize your gallery",
        "Keep your art in one simple, beautiful place, view details, revisit, and reflect on your creative journey.",
    ),
    (
        "/assets/icon-save.png",
        "Save your personal collection",
        "Create your own space to collect and cherish your artworks over time.",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#F4EFEB] text-[#442D1D]">
            <header class="flex justify-between items-center px-6 py-5">
                <span class="text-4xl font-extrabold">"Artzy"</span>
                <nav class="hidden md:flex items-center gap-8 text-lg font-medium">
                    <a href="#about">"About"</a>
                    <a href="#gallery">"Gallery"</a>
                    <a href="#howitworks">"How It Works"</a>
                    <A href="/login" class="py-1.5 px-6 bg-[#442D1D] text-white rounded-3xl">"Login"</A>
                </nav>
            </header>

            <section class="relative">
                <img src="/assets/hero.png" alt="River landscape painting" class="w-full h-[70vh] object-cover" />
                <div class="absolute inset-0 flex flex-col items-center justify-center text-center text-white bg-black/30">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">"The Modern Way to Experience Art"</h1>
                    <a href="#about" class="px-8 py-3 rounded-full border border-white hover:bg-white hover:text-[#442D1D] transition">
                        "Explore More"
                    </a>
                </div>
            </section>

            <About />
            <FeaturedGallery />
            <HowItWorks />
            <GetStarted />

            <footer class="py-6 text-center text-sm bg-[#442D1D] text-[#E8D1A7]">
                "© 2025 Artzy. All rights reserved."
            </footer>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="max-w-5xl mx-auto px-6 py-16 grid md:grid-cols-2 gap-10 items-center">
            <div>
                <h2 class="text-3xl font-bold mb-4">"About"</h2>
                <p class="mb-4">
                    "Artzy is a minimalist digital gallery designed for artists who value clarity and creativity. \
                     It allows you to store, organize, and reflect on your artworks in one beautiful space."
                </p>
                <p>
                    "Whether you're a beginner or an experienced creator, Artzy gives your creations a quiet place \
                     to live and grow, a timeless archive where every piece tells your story and every canvas finds its home."
                </p>
            </div>
            <img src="/assets/window.png" alt="Window with flowers painting" class="rounded-xl shadow-lg" />
        </section>
    }
}

#[component]
fn FeaturedGallery() -> impl IntoView {
    view! {
        <section id="gallery" class="py-16 bg-gradient-to-b from-[#F4EFEB] to-[#C5B49A]">
            <h2 class="text-3xl font-bold text-center mb-10">"Gallery"</h2>
            <div class="flex flex-wrap justify-center gap-8 px-6">
                {FEATURED.iter().map(|item| view! {
                    <div class="bg-[#E8D1A7] text-center rounded-xl shadow-lg overflow-hidden flex flex-col w-80 hover:scale-105 transition-transform duration-300">
                        <img src=item.image alt=item.title class="w-72 h-80 mx-auto mt-8 object-cover rounded-md" />
                        <div class="p-4">
                            <p class="text-lg font-bold">{item.title}</p>
                            <p class="text-sm font-medium mb-4">{format!("by {}", item.artist)}</p>
                            <A href="/login" class="text-sm font-medium italic hover:text-[#6c4e3e]">"View Details"</A>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="howitworks" class="max-w-5xl mx-auto px-6 py-16">
            <h2 class="text-3xl font-bold text-center mb-10">"How It Works"</h2>
            <div class="grid md:grid-cols-3 gap-8">
                {STEPS.iter().map(|(icon, title, description)| view! {
                    <div class="text-center">
                        <img src=*icon alt=*title class="w-16 h-16 mx-auto mb-4" />
                        <h3 class="font-bold text-lg mb-2">{*title}</h3>
                        <p class="text-sm">{*description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn GetStarted() -> impl IntoView {
    view! {
        <section class="py-16 text-center">
            <h2 class="text-3xl font-bold mb-2">"Start Your Collection"</h2>
            <p class="mb-6">"Sign in to begin building your personal digital gallery"</p>
            <A href="/beranda" class="px-10 py-3 rounded-full bg-[#442D1D] text-white font-medium">"Get Started"</A>
        </section>
    }
}
