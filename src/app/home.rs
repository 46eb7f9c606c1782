use leptos::prelude::*;
use leptos_meta::Title;

use super::backdrop::{Edge, ParallaxBackground, SectionTransition};
use super::icons::{
    BriefcaseIcon, ChevronDownIcon, GithubIcon, LinkedinIcon, MailIcon, UserIcon, XIcon,
};
use super::lightbox::MediaFigure;
use super::reveal::AnimateOnScroll;
use crate::media::Project;
use crate::motion::Animation;

const PROJECTS: [Project; 3] = [
    Project {
        title: "Go2 Sbus Open SDK",
        description: "Allows owners of the locked down Unitree Go2 air and pro robots to build intelligent functionality without the need for a jailbreak by exploiting the integrated S-BUS port and utilizing external computation for navigation.",
        media: "/images/go2demo.mp4",
        tags: &["Robotics", "Unitree Go2", "Zenoh"],
        link: Some("https://github.com/BenCaunt/go2-sbus-unleashed"),
    },
    Project {
        title: "Moondream Real-time Robot VLM",
        description: "Using the moondream small Vision language model for real time, promptable object detection for robotics. Combines observations with optical flow to achieve real-time, promptable object tracking.",
        media: "/images/MoondreamRealtimeRobotVLM.gif",
        tags: &["Computer Vision", "VLM", "Robotics"],
        link: Some("https://github.com/BenCaunt/MoondreamObjectTracking"),
    },
    Project {
        title: "Real-time Monocular Odometry",
        description: "Fast, monocular pose estimation from a single camera. Open source release coming soon.",
        media: "/images/RealtimeMonocularOdometry.gif",
        tags: &["Computer Vision", "Odometry", "Robotics", "SLAM"],
        link: None,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />

        // Hero
        <section
            id="hero"
            class="min-h-[80vh] flex flex-col justify-center pt-24 sm:pt-28 md:pt-32 px-6 md:px-4 relative"
        >
            <ParallaxBackground>
                <div class="text-center">
                    <AnimateOnScroll duration=0.8>
                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-blue-700 to-blue-500 bg-clip-text text-transparent">
                            "Ben Caunt"
                        </h1>
                    </AnimateOnScroll>
                    <AnimateOnScroll animation=Animation::SlideUp delay=0.2 duration=0.8>
                        <p class="text-xl md:text-2xl text-gray-700 mb-4">
                            "Full Stack Developer & Robotics Enthusiast"
                        </p>
                    </AnimateOnScroll>
                    <AnimateOnScroll animation=Animation::SlideUp delay=0.6 duration=0.8>
                        <SocialLinks />
                    </AnimateOnScroll>
                    <AnimateOnScroll delay=0.4 duration=0.4>
                        <a
                            href="#about"
                            class="absolute bottom-10 sm:bottom-12 md:bottom-16 left-1/2 transform -translate-x-1/2 animate-bounce text-gray-600"
                        >
                            <ChevronDownIcon size=28 />
                        </a>
                    </AnimateOnScroll>
                </div>
            </ParallaxBackground>
            <SectionTransition position=Edge::Bottom />
        </section>

        // About
        <section
            id="about"
            class="min-h-screen flex items-center justify-center py-12 md:py-16 px-6 md:px-4 relative"
        >
            <SectionTransition position=Edge::Top />
            <div class="max-w-4xl mx-auto">
                <AnimateOnScroll animation=Animation::SlideUp>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-8 md:mb-12 bg-gradient-to-r from-blue-700 to-blue-500 bg-clip-text text-transparent">
                        "About Me"
                    </h2>
                </AnimateOnScroll>
                <div class="grid md:grid-cols-2 gap-8 md:gap-12">
                    <AnimateOnScroll
                        animation=Animation::SlideRight
                        delay=0.2
                        class="relative order-1 md:order-2"
                    >
                        <img
                            src="/images/profile_picture.jpg"
                            alt="Profile"
                            class="rounded-lg shadow-xl w-full"
                        />
                    </AnimateOnScroll>
                    <div class="space-y-6 order-2 md:order-1">
                        <AnimateOnScroll animation=Animation::SlideLeft delay=0.3>
                            <div class="flex items-start space-x-4">
                                <span class="text-blue-600 mt-1">
                                    <UserIcon />
                                </span>
                                <div>
                                    <h3 class="text-xl font-semibold mb-2">"Who I Am"</h3>
                                    <p class="text-gray-700">
                                        "A passionate developer with a keen eye for creating elegant solutions to complex problems."
                                    </p>
                                </div>
                            </div>
                        </AnimateOnScroll>
                        <AnimateOnScroll animation=Animation::SlideLeft delay=0.5>
                            <div class="flex items-start space-x-4">
                                <span class="text-blue-600 mt-1">
                                    <BriefcaseIcon />
                                </span>
                                <div>
                                    <h3 class="text-xl font-semibold mb-2">"Experience"</h3>
                                    <p class="text-gray-700">
                                        "I'm a Co-founder at WarmHub where we build the infrastructure needed to create a world powered by trusted software. In the past I worked on perception software for surgical robots."
                                    </p>
                                </div>
                            </div>
                        </AnimateOnScroll>
                    </div>
                </div>
            </div>
            <SectionTransition position=Edge::Bottom color="from-yellow-50/50 to-yellow-50/80" />
        </section>

        // Open Source
        <section id="open-source" class="min-h-screen py-12 md:py-16 px-6 md:px-4 relative">
            <SectionTransition position=Edge::Top color="from-yellow-50/50 to-yellow-50/80" />
            <div class="max-w-6xl mx-auto">
                <AnimateOnScroll animation=Animation::SlideUp>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-8 md:mb-12 bg-gradient-to-r from-blue-700 to-blue-500 bg-clip-text text-transparent">
                        "Featured Open Source Projects"
                    </h2>
                </AnimateOnScroll>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project=*project delay={0.1 * index as f64} /> }
                        })
                        .collect_view()}
                </div>
            </div>
            <SectionTransition position=Edge::Bottom color="from-yellow-50/70 to-yellow-50/90" />
        </section>

        // Robotics
        <section
            id="robotics"
            class="min-h-screen flex items-center justify-center py-12 md:py-16 px-6 md:px-4 bg-gradient-to-br from-gray-100/50 to-gray-200/80 relative"
        >
            <SectionTransition position=Edge::Top color="from-gray-100/70 to-gray-200/90" />
            <div class="max-w-6xl mx-auto">
                <AnimateOnScroll animation=Animation::SlideUp>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-8 md:mb-12 bg-gradient-to-r from-blue-700 to-blue-500 bg-clip-text text-transparent">
                        "Robotics Background"
                    </h2>
                </AnimateOnScroll>
                <div class="grid md:grid-cols-2 gap-8 md:gap-12">
                    <AnimateOnScroll animation=Animation::SlideRight delay=0.2>
                        <div class="bg-white p-6 rounded-lg shadow-lg">
                            <img
                                src="/images/FTC_robot_still.jpeg"
                                alt="FTC Robot"
                                class="w-full h-64 object-cover rounded-lg mb-6"
                            />
                            <h3 class="text-xl font-semibold mb-2">
                                <i>"FIRST"</i>
                                " Tech Challenge"
                            </h3>
                            <p class="text-gray-700">
                                "While in highschool I competed in the " <i>"FIRST"</i>
                                " Tech Challenge and " <i>"FIRST"</i>
                                " Robotics competition. In 2022 I was fortunate to be 1 of 20 students to win the Dean's List Award at the "
                                <i>"FIRST"</i> " World Championship."
                            </p>
                        </div>
                    </AnimateOnScroll>
                    <AnimateOnScroll animation=Animation::SlideLeft delay=0.4>
                        <div class="bg-white p-6 rounded-lg shadow-lg">
                            <img
                                src="/images/Go2AndFrogbot.png"
                                alt="Go2 and Frogbot"
                                class="w-full h-64 object-cover rounded-lg mb-6"
                            />
                            <h3 class="text-xl font-semibold mb-2">"Modern Robotics Development"</h3>
                            <p class="text-gray-700">
                                "My current projects utilize the Unitree Go2 quadruped robot (left) and my custom wheeled robot testbed called Frog (right). These platforms allow me to develop and test cutting-edge robotics algorithms and computer vision techniques."
                            </p>
                        </div>
                    </AnimateOnScroll>
                </div>
            </div>
            <SectionTransition position=Edge::Bottom color="from-gray-100/70 to-gray-200/90" />
        </section>

        // Contact
        <section
            id="contact"
            class="min-h-screen flex items-center justify-center py-12 md:py-16 px-6 md:px-4 relative"
        >
            <SectionTransition position=Edge::Top />
            <div class="max-w-4xl mx-auto text-center">
                <AnimateOnScroll animation=Animation::SlideUp>
                    <h2 class="text-3xl md:text-4xl font-bold mb-8 md:mb-12 bg-gradient-to-r from-blue-700 to-blue-500 bg-clip-text text-transparent">
                        "Get In Touch"
                    </h2>
                </AnimateOnScroll>
                <AnimateOnScroll delay=0.2>
                    <p class="text-xl text-gray-700 mb-8">
                        "I'm always open to new opportunities and interesting open source projects."
                    </p>
                </AnimateOnScroll>
                <AnimateOnScroll animation=Animation::Scale delay=0.4>
                    <a
                        href="mailto:bdcaunt@gmail.com"
                        class="inline-flex items-center px-6 py-3 bg-blue-600 text-white rounded-full hover:bg-blue-700 transition-colors"
                    >
                        <span class="mr-2">
                            <MailIcon size=20 />
                        </span>
                        "Send me an email"
                    </a>
                </AnimateOnScroll>
                <AnimateOnScroll animation=Animation::SlideUp delay=0.6>
                    <div class="mt-12">
                        <SocialLinks size=28 class="flex justify-center space-x-6" with_mail=false />
                    </div>
                </AnimateOnScroll>
            </div>
        </section>

        <footer class="relative z-10 py-6 text-center text-sm text-gray-500">
            {format!("Built {}", &env!("BUILD_TIME")[..10])}
        </footer>
    }
}

#[component]
fn ProjectCard(project: Project, delay: f64) -> impl IntoView {
    view! {
        <AnimateOnScroll animation=Animation::Scale delay=delay>
            <div class="bg-white rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow">
                <MediaFigure src=project.media alt=project.title class="w-full h-48 object-cover" />
                <div class="p-4 md:p-6">
                    <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                    <p class="text-gray-600 mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-blue-50 text-blue-600 rounded-full text-sm">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    {project
                        .link
                        .map(|link| {
                            view! {
                                <a
                                    href=link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center text-blue-600 hover:text-blue-800"
                                >
                                    <span class="mr-1">
                                        <GithubIcon size=16 />
                                    </span>
                                    "View on GitHub"
                                </a>
                            }
                        })}
                </div>
            </div>
        </AnimateOnScroll>
    }
}

#[component]
fn SocialLinks(
    #[prop(default = 24)] size: u32,
    #[prop(default = "flex justify-center space-x-4")] class: &'static str,
    #[prop(default = true)] with_mail: bool,
) -> impl IntoView {
    view! {
        <div class=class>
            <a
                href="https://github.com/BenCaunt"
                target="_blank"
                rel="noopener noreferrer"
                class="text-gray-600 hover:text-blue-600 transition-colors"
                aria-label="GitHub Profile"
            >
                <GithubIcon size=size />
            </a>
            <a
                href="https://www.linkedin.com/in/ben-caunt"
                target="_blank"
                rel="noopener noreferrer"
                class="text-gray-600 hover:text-blue-600 transition-colors"
                aria-label="LinkedIn Profile"
            >
                <LinkedinIcon size=size />
            </a>
            <a
                href="https://x.com/bdcauntben"
                target="_blank"
                rel="noopener noreferrer"
                class="text-gray-600 hover:text-blue-600 transition-colors"
                aria-label="X Profile"
            >
                <XIcon size=size />
            </a>
            {with_mail
                .then(|| {
                    view! {
                        <a
                            href="mailto:bdcaunt@gmail.com"
                            class="text-gray-600 hover:text-blue-600 transition-colors"
                            aria-label="Email"
                        >
                            <MailIcon size=size />
                        </a>
                    }
                })}
        </div>
    }
}
