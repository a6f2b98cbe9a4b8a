use crate::entities::AccountCode;

/// Site / operational categories, consulted on the project book only.
pub const SITE_KEYWORDS: &[(&str, AccountCode)] = &[
    ("حمل", AccountCode(7301)),
    ("کرایه", AccountCode(7301)),
    ("تخلیه", AccountCode(7302)),
    ("بارگیری", AccountCode(7302)),
    ("بیمه", AccountCode(7303)),
    ("آزمایشگاه", AccountCode(7304)),
    ("لوازم بهداشتی", AccountCode(7310)),
    ("مواد", AccountCode(7315)),
    ("پیمانکار", AccountCode(7330)),
    ("بازسازی", AccountCode(7331)),
    ("اجاره", AccountCode(7341)),
    ("اجرت", AccountCode(7350)),
    ("تعویض", AccountCode(7350)),
    ("نظافت", AccountCode(7350)),
    ("تجاری", AccountCode(3130)),
    (" ایاب و ذهاب ", AccountCode(7216)),
];
