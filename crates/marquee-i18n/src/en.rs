pub(crate) const ENTRIES: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.portfolio", "Portfolio"),
    ("nav.contact", "Contact"),
    ("intro.tagline", "INTRODUCING"),
    ("title", "Creative Scenarist & Content Manager"),
    (
        "intro.text",
        "YouTube + Instagram Scenario | Progrev | Creative | Telegram blogging",
    ),
    ("experience", "Experience"),
    ("role.scriptwriter", "Scenarist"),
    ("role.contentManager", "Content Manager & Writer"),
    ("former.roles", "Former Copywriter, Tutor, and Youth Leader"),
    ("button.viewWork", "View Work"),
    ("button.contactMe", "Contact Me"),
    ("present", "Present"),
    ("screenplay", "SCREENPLAY"),
    ("scriptTitle", "THE DIGITAL JOURNEY"),
    ("writtenBy", "Written by: GULSEVAR ARZIKULOVA"),
    ("fadeIn", "FADE IN:"),
    ("ext.scene", "EXT. DIGITAL LANDSCAPE - NIGHT"),
    (
        "scene.description",
        "A vast digital landscape stretches into infinity. Lights flicker in the distance as stories take shape from the void.",
    ),
    ("narrator", "NARRATOR (V.O.)"),
    ("narrator.line", "In a world where words shape reality..."),
    ("character.gulsevar", "GULSEVAR"),
    (
        "gulsevar.line",
        "There is no secret ingredient. It's all in us. \nJust a simple Uzbek girl following her dreams.",
    ),
    ("continued", "CONTINUED"),
    ("portfolio.title", "Portfolio"),
    ("portfolio.employment", "Employment History"),
    ("portfolio.education", "Education & Training"),
    ("portfolio.skills.soft", "Soft Skills"),
    ("portfolio.skills.technical", "Technical Skills"),
    ("portfolio.certifications", "Certifications & Achievements"),
    ("portfolio.resumeCta", "Download Resume"),
    ("contact.title", "Get in Touch"),
    (
        "contact.description",
        "Use the contact information below for collaboration inquiries, project information, or just to say hello.",
    ),
    ("contact.email", "Email"),
    ("contact.phone", "Phone"),
    ("contact.location", "Location"),
    ("contact.form.name", "Your Name"),
    ("contact.form.name.placeholder", "Enter your name"),
    ("contact.form.email", "Email"),
    ("contact.form.email.placeholder", "Enter your email"),
    ("contact.form.message", "Message"),
    ("contact.form.message.placeholder", "Type your message here..."),
    ("contact.form.submit", "Send Message"),
    ("contact.form.submitting", "Sending..."),
    (
        "contact.form.success",
        "Your message has been sent successfully. We will get back to you soon!",
    ),
    (
        "contact.form.error",
        "There was an error sending your message. Please try again.",
    ),
    (
        "footer.description",
        "Creative scenarist and content manager specializing in compelling narratives and engaging content.",
    ),
    ("footer.sections", "Sections"),
    ("footer.designedBy", "Designed, developed and deployed by"),
    ("footer.copyright", "All rights reserved."),
];
