use crate::entities::AccountCode;

/// Office-oriented categories, consulted on both books. Order is significant:
/// the first keyword found in a description wins.
pub const OFFICE_KEYWORDS: &[(&str, AccountCode)] = &[
    // Utilities.
    ("آب", AccountCode(7201)),
    ("برق", AccountCode(7201)),
    ("گاز", AccountCode(7201)),
    ("قبض", AccountCode(7201)),
    // Communications.
    ("اینترنت", AccountCode(7202)),
    ("شارژ", AccountCode(7202)),
    ("تلفن همراه", AccountCode(7202)),
    ("تلفن ثابت", AccountCode(7202)),
    // Stationery.
    ("خودکار", AccountCode(7203)),
    ("مداد", AccountCode(7203)),
    ("لوازم التحریر", AccountCode(7203)),
    // Hospitality.
    ("صبحانه", AccountCode(7204)),
    ("مواد شوینده", AccountCode(7204)),
    ("شیرینی", AccountCode(7204)),
    ("پذیرایی", AccountCode(7204)),
    // Travel.
    ("بلیط هواپیما", AccountCode(7205)),
    ("کشتی", AccountCode(7205)),
    ("قطار", AccountCode(7205)),
    ("هتل", AccountCode(7205)),
    // Printing.
    ("چاپ", AccountCode(7208)),
    ("کپی", AccountCode(7208)),
    ("پرینت", AccountCode(7208)),
    // Uniforms.
    ("لباس", AccountCode(7210)),
    ("فرم", AccountCode(7210)),
    ("لباس کارکنان", AccountCode(7210)),
    // Medical.
    ("درمان", AccountCode(7212)),
    ("دارو", AccountCode(7212)),
    ("تست آزمایشگاه", AccountCode(7212)),
    ("آزمایشگاه", AccountCode(7212)),
    ("درمانگاه", AccountCode(7212)),
    // Meals.
    ("نهار", AccountCode(7215)),
    ("شام", AccountCode(7215)),
    // Local transport.
    ("ایاب ذهاب", AccountCode(7216)),
    ("اسنپ", AccountCode(7216)),
    ("تپسی", AccountCode(7216)),
    ("آژانس", AccountCode(7216)),
    (" ایاب و ذهاب ", AccountCode(7216)),
    // Gifts.
    ("هدیه", AccountCode(7219)),
    // Office supplies.
    ("دفتر", AccountCode(7226)),
    // Fuel.
    ("بنزین", AccountCode(7252)),
    // Advertising and recruitment.
    ("آگهی", AccountCode(7298)),
    ("تبلیغات", AccountCode(7298)),
    ("فیلمبرداری", AccountCode(7298)),
    ("استخدام", AccountCode(7298)),
];
