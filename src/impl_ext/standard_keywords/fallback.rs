use crate::entities::AccountCode;

/// Coarse table used to resolve the optional keyword-hint column.
pub const HINT_KEYWORDS: &[(&str, AccountCode)] = &[
    ("حمل", AccountCode(7301)),
    ("کرایه", AccountCode(7301)),
    ("آب", AccountCode(7201)),
    ("برق", AccountCode(7201)),
    ("گاز", AccountCode(7201)),
    ("پست", AccountCode(7202)),
    ("تلفن", AccountCode(7202)),
    ("تلگراف", AccountCode(7202)),
    ("ملزومات", AccountCode(7203)),
    ("نوشت افزار", AccountCode(7203)),
    ("آبدارخانه", AccountCode(7204)),
    ("پذیرایی", AccountCode(7204)),
    ("سفر", AccountCode(7205)),
    ("اقامت", AccountCode(7205)),
    ("چاپ", AccountCode(7208)),
    ("کپی", AccountCode(7208)),
    ("پوشاک", AccountCode(7210)),
    ("بهداشت", AccountCode(7212)),
    ("درمان", AccountCode(7212)),
    ("غذا", AccountCode(7215)),
    ("ایاب", AccountCode(7216)),
    ("ذهاب", AccountCode(7216)),
    ("کمک", AccountCode(7219)),
    ("هدایا", AccountCode(7219)),
    ("مصرفی", AccountCode(7226)),
    ("سوخت", AccountCode(7252)),
    ("تبلیغات", AccountCode(7298)),
    ("آگهی", AccountCode(7298)),
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
    ("تجاری", AccountCode(3130)),
];
