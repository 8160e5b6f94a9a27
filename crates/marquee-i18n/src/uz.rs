pub(crate) const ENTRIES: &[(&str, &str)] = &[
    ("nav.home", "Bosh sahifa"),
    ("nav.portfolio", "Portfolio"),
    ("nav.contact", "Aloqa"),
    ("intro.tagline", "TANISHING"),
    ("title", "Ijodiy ssenariy muallifi va kontent menejment ustasi"),
    (
        "intro.text",
        "YouTube + Instagram stsenariysi | Progrev | Ijodiy | Telegramda blog yuritish.",
    ),
    ("experience", "Tajriba"),
    ("role.scriptwriter", "Ssenariy muallifi"),
    ("role.contentManager", "Kontent menejeri va muallif"),
    ("former.roles", "Ilgari kopirayter, repetitor va yoshlar yetakchisi"),
    ("button.viewWork", "Ishlarni ko‘rish"),
    ("button.contactMe", "Bog‘lanish"),
    ("present", "Hozirgacha"),
    ("screenplay", "SSENARIY"),
    ("scriptTitle", "RAQAMLI SAYOHAT"),
    ("writtenBy", "Muallif: GULSEVAR ARZIKULOVA"),
    ("fadeIn", "PAYDO BO‘LADI:"),
    ("ext.scene", "TASHQI. RAQAMLI MANZARA - TUN"),
    (
        "scene.description",
        "Cheksiz raqamli manzara yoyilib ketgan. Uzoqda chiroqlar chaqnaydi, bo‘shliqdan hikoyalar vujudga keladi.",
    ),
    ("narrator", "HIKOYACHI (TOVUSH OSTIDA)"),
    ("narrator.line", "So‘zlar haqiqatni shakllantiradigan dunyoda..."),
    ("character.gulsevar", "GULSEVAR"),
    (
        "gulsevar.line",
        "Hech qanday sirli tarkibiy qism yo‘q. Hammasi bizda. \nShunchaki oddiy o‘zbek qizi orzulari ortidan.",
    ),
    ("continued", "DAVOMI"),
    ("portfolio.title", "Portfolio"),
    ("portfolio.employment", "Ish tajribasi"),
    ("portfolio.education", "Ta'lim va malaka oshirish"),
    ("portfolio.skills.soft", "Soft ko‘nikmalar"),
    ("portfolio.skills.technical", "Texnik ko‘nikmalar"),
    ("portfolio.certifications", "Sertifikatlar va yutuqlar"),
    ("portfolio.resumeCta", "Rezyumeni yuklab olish"),
    ("contact.title", "Bog‘lanish"),
    (
        "contact.description",
        "Hamkorlik, loyiha yoki shunchaki salom aytish uchun quyidagi kontaktlardan foydalaning.",
    ),
    ("contact.email", "Email"),
    ("contact.phone", "Telefon"),
    ("contact.location", "Manzil"),
    ("contact.form.name", "Ismingiz"),
    ("contact.form.name.placeholder", "Ismingizni kiriting"),
    ("contact.form.email", "Email"),
    ("contact.form.email.placeholder", "Emailingizni kiriting"),
    ("contact.form.message", "Xabar"),
    ("contact.form.message.placeholder", "Xabaringizni bu yerga yozing..."),
    ("contact.form.submit", "Yuborish"),
    ("contact.form.submitting", "Yuborilmoqda..."),
    (
        "contact.form.success",
        "Xabaringiz muvaffaqiyatli yuborildi. Tez orada siz bilan bog‘lanamiz!",
    ),
    (
        "contact.form.error",
        "Xatolik yuz berdi. Iltimos, qayta urinib ko‘ring.",
    ),
    (
        "footer.description",
        "Qiziqarli narrativlar va jozibali kontent yaratishga ixtisoslashgan ijodiy ssenariy yozuvchisi va kontent menejeri.",
    ),
    ("footer.sections", "Bo‘limlar"),
    ("footer.designedBy", "Dizayn, ishlab chiqarish va joylashtirishni amalga oshirdi:"),
    ("footer.copyright", "Barcha huquqlar himoyalangan."),
];
