pub(crate) const ENTRIES: &[(&str, &str)] = &[
    ("nav.home", "Главная"),
    ("nav.portfolio", "Портфолио"),
    ("nav.contact", "Контакты"),
    ("intro.tagline", "ПРЕДСТАВЛЯЕМ"),
    ("title", "Креативный сценарист и контент-менеджер"),
    (
        "intro.text",
        "Сценарии для YouTube и Instagram | Прогрев | Креатив | Ведение Telegram-блога",
    ),
    ("experience", "Опыт"),
    ("role.scriptwriter", "Сценарист"),
    ("role.contentManager", "Контент-менеджер и автор"),
    ("former.roles", "Ранее копирайтер, репетитор и лидер молодёжи"),
    ("button.viewWork", "Смотреть работы"),
    ("button.contactMe", "Связаться"),
    ("present", "Настоящее время"),
    ("screenplay", "СЦЕНАРИЙ"),
    ("scriptTitle", "ЦИФРОВОЕ ПУТЕШЕСТВИЕ"),
    ("writtenBy", "Автор: ГУЛЬСЕВАР АРЗИКУЛОВА"),
    ("fadeIn", "ИЗ ЗАТЕМНЕНИЯ:"),
    ("ext.scene", "НАТ. ЦИФРОВОЙ ПЕЙЗАЖ - НОЧЬ"),
    (
        "scene.description",
        "Бескрайний цифровой пейзаж уходит в бесконечность. Вдали мерцают огни, из пустоты рождаются истории.",
    ),
    ("narrator", "РАССКАЗЧИК (ЗА КАДРОМ)"),
    ("narrator.line", "В мире, где слова формируют реальность..."),
    ("character.gulsevar", "ГУЛЬСЕВАР"),
    (
        "gulsevar.line",
        "Нет никакого секретного ингредиента. Всё в нас самих. \nПросто обычная узбекская девушка, идущая за мечтой.",
    ),
    ("continued", "ПРОДОЛЖЕНИЕ СЛЕДУЕТ"),
    ("portfolio.title", "Портфолио"),
    ("portfolio.employment", "Опыт работы"),
    ("portfolio.education", "Образование и обучение"),
    ("portfolio.skills.soft", "Гибкие навыки"),
    ("portfolio.skills.technical", "Технические навыки"),
    ("portfolio.certifications", "Сертификаты и достижения"),
    ("portfolio.resumeCta", "Скачать резюме"),
    ("contact.title", "Свяжитесь со мной"),
    (
        "contact.description",
        "Используйте контакты ниже для предложений о сотрудничестве, вопросов по проектам или просто чтобы поздороваться.",
    ),
    ("contact.email", "Почта"),
    ("contact.phone", "Телефон"),
    ("contact.location", "Локация"),
    ("contact.form.name", "Ваше имя"),
    ("contact.form.name.placeholder", "Введите ваше имя"),
    ("contact.form.email", "Почта"),
    ("contact.form.email.placeholder", "Введите вашу почту"),
    ("contact.form.message", "Сообщение"),
    ("contact.form.message.placeholder", "Напишите сообщение здесь..."),
    ("contact.form.submit", "Отправить"),
    ("contact.form.submitting", "Отправка..."),
    (
        "contact.form.success",
        "Ваше сообщение успешно отправлено. Мы скоро свяжемся с вами!",
    ),
    (
        "contact.form.error",
        "Не удалось отправить сообщение. Пожалуйста, попробуйте ещё раз.",
    ),
    (
        "footer.description",
        "Креативный сценарист и контент-менеджер, специализирующийся на увлекательных нарративах и вовлекающем контенте.",
    ),
    ("footer.sections", "Разделы"),
    ("footer.designedBy", "Дизайн, разработка и деплой:"),
    ("footer.copyright", "Все права защищены."),
];
