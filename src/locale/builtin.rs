//! Built-in locale data.

/// Full and abbreviated month names of one calendar system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames {
    pub full: [&'static str; 12],
    pub short: [&'static str; 12],
}

/// Locale settings for formatting and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub id: &'static str,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub gregorian_months: MonthNames,
    pub jalali_months: MonthNames,
    pub hijri_months: MonthNames,
    /// Sunday first.
    pub day_names_short: [&'static str; 7],
    /// Sunday first.
    pub day_names_full: [&'static str; 7],
    /// Glyphs for the digits 0 through 9.
    pub digits: [char; 10],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

impl Locale {
    /// English names, ASCII digits.
    pub fn en() -> Self {
        Locale {
            id: "en",
            am_string: "AM",
            pm_string: "PM",
            gregorian_months: MonthNames {
                full: [
                    "January",
                    "February",
                    "March",
                    "April",
                    "May",
                    "June",
                    "July",
                    "August",
                    "September",
                    "October",
                    "November",
                    "December",
                ],
                short: [
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
                ],
            },
            jalali_months: MonthNames {
                full: [
                    "Farvardin",
                    "Ordibehesht",
                    "Khordad",
                    "Tir",
                    "Mordad",
                    "Shahrivar",
                    "Mehr",
                    "Aban",
                    "Azar",
                    "Dey",
                    "Bahman",
                    "Esfand",
                ],
                short: [
                    "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
                ],
            },
            hijri_months: MonthNames {
                full: [
                    "Muharram",
                    "Safar",
                    "Rabi al-Awwal",
                    "Rabi al-Thani",
                    "Jumada al-Awwal",
                    "Jumada al-Thani",
                    "Rajab",
                    "Shaban",
                    "Ramadan",
                    "Shawwal",
                    "Dhu al-Qadah",
                    "Dhu al-Hijjah",
                ],
                short: [
                    "Muh", "Saf", "Rab1", "Rab2", "Jum1", "Jum2", "Raj", "Shb", "Ram", "Shw", "DhQ", "DhH",
                ],
            },
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
        }
    }

    /// Persian names, Persian digits.
    pub fn fa() -> Self {
        let jalali = [
            "فروردین",
            "اردیبهشت",
            "خرداد",
            "تیر",
            "مرداد",
            "شهریور",
            "مهر",
            "آبان",
            "آذر",
            "دی",
            "بهمن",
            "اسفند",
        ];
        let gregorian = [
            "ژانویه",
            "فوریه",
            "مارس",
            "آوریل",
            "مه",
            "ژوئن",
            "ژوئیه",
            "اوت",
            "سپتامبر",
            "اکتبر",
            "نوامبر",
            "دسامبر",
        ];
        let hijri = [
            "محرم",
            "صفر",
            "ربیع‌الاول",
            "ربیع‌الثانی",
            "جمادی‌الاول",
            "جمادی‌الثانی",
            "رجب",
            "شعبان",
            "رمضان",
            "شوال",
            "ذی‌القعده",
            "ذی‌الحجه",
        ];
        Locale {
            id: "fa",
            am_string: "ق.ظ",
            pm_string: "ب.ظ",
            gregorian_months: MonthNames {
                full: gregorian,
                short: gregorian,
            },
            jalali_months: MonthNames {
                full: jalali,
                short: jalali,
            },
            hijri_months: MonthNames {
                full: hijri,
                short: hijri,
            },
            day_names_short: ["ی", "د", "س", "چ", "پ", "ج", "ش"],
            day_names_full: [
                "یکشنبه",
                "دوشنبه",
                "سه‌شنبه",
                "چهارشنبه",
                "پنجشنبه",
                "جمعه",
                "شنبه",
            ],
            digits: ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
        }
    }
}
