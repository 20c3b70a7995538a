//! City and tier colour helpers shared by the cards and the shopping list.

use albion_ledger::domain::City;

// ============================================
// CITY COLOURS
// ============================================

pub fn city_panel(city: City) -> &'static str {
    match city {
        City::Martlock => "border-blue-500 text-blue-200 bg-blue-900/20",
        City::Bridgewatch => "border-orange-500 text-orange-200 bg-orange-900/20",
        City::Lymhurst => "border-green-500 text-green-200 bg-green-900/20",
        City::FortSterling => "border-gray-200 text-gray-100 bg-gray-700/50",
        City::Thetford => "border-purple-500 text-purple-200 bg-purple-900/20",
        City::Caerleon => "border-red-600 text-red-200 bg-red-900/20",
        City::Brecilien => "border-pink-400 text-pink-200 bg-pink-900/20",
        City::Any => "border-slate-500 text-slate-300 bg-slate-800",
    }
}

pub fn city_text(city: City) -> &'static str {
    match city {
        City::Martlock => "text-blue-200",
        City::Bridgewatch => "text-orange-200",
        City::Lymhurst => "text-green-200",
        City::FortSterling => "text-gray-100",
        City::Thetford => "text-purple-200",
        City::Caerleon => "text-red-200",
        City::Brecilien => "text-pink-200",
        City::Any => "text-slate-300",
    }
}

pub fn city_border(city: City) -> &'static str {
    match city {
        City::Martlock => "border-blue-500",
        City::Bridgewatch => "border-orange-500",
        City::Lymhurst => "border-green-500",
        City::FortSterling => "border-gray-200",
        City::Thetford => "border-purple-500",
        City::Caerleon => "border-red-600",
        City::Brecilien => "border-pink-400",
        City::Any => "border-slate-500",
    }
}

/// Single glyph shown in the city badge.
pub fn city_icon(city: City) -> &'static str {
    match city {
        City::Martlock => "🛡",
        City::Bridgewatch => "☀",
        City::Lymhurst => "🌲",
        City::FortSterling => "⛰",
        City::Thetford => "💧",
        City::Caerleon => "⚔",
        City::Brecilien => "🌙",
        City::Any => "🗺",
    }
}

// ============================================
// TIER COLOURS
// ============================================

pub struct TierColors {
    pub border: &'static str,
    pub text: &'static str,
    pub bg: &'static str,
}

pub fn tier_colors(tier: u8) -> TierColors {
    let (border, text, bg) = match tier {
        4 => ("border-blue-500", "text-blue-400", "bg-blue-900/20"),
        5 => ("border-red-600", "text-red-500", "bg-red-900/20"),
        6 => ("border-orange-500", "text-orange-400", "bg-orange-900/20"),
        7 => ("border-yellow-400", "text-yellow-300", "bg-yellow-900/20"),
        8 => ("border-white", "text-white", "bg-slate-200/10"),
        _ => ("border-slate-500", "text-slate-400", "bg-slate-800"),
    };
    TierColors { border, text, bg }
}

// ============================================
// CONTROLS
// ============================================

pub fn tab_button(active: bool) -> &'static str {
    if active {
        "relative top-[1px] rounded-t-lg border-l border-r border-t px-6 py-2 text-sm font-bold uppercase tracking-wide bg-[#252e40] border-slate-500 text-amber-500 z-10"
    } else {
        "relative top-[1px] rounded-t-lg border-l border-r border-t px-6 py-2 text-sm font-bold uppercase tracking-wide bg-[#0f141f] border-slate-800 text-slate-500 hover:bg-[#151c2a] hover:text-slate-300"
    }
}

pub fn filter_button(active: bool) -> &'static str {
    if active {
        "rounded px-4 py-1.5 text-xs font-bold uppercase bg-amber-600 text-white shadow"
    } else {
        "rounded px-4 py-1.5 text-xs font-bold uppercase text-slate-400 hover:text-white"
    }
}

pub const BTN_CRAFT: &str = "flex-1 rounded border border-amber-900 bg-gradient-to-b from-amber-600 to-amber-700 px-2 py-1.5 text-xs font-bold uppercase tracking-wide text-white shadow-md hover:from-amber-500 hover:to-amber-600";
pub const BTN_DANGER: &str = "rounded border border-red-900/50 bg-red-900/20 px-4 py-2 text-sm font-bold text-red-400 hover:bg-red-900/40 hover:text-red-300";
pub const BTN_SECONDARY: &str = "rounded border border-slate-600 bg-slate-800 px-4 py-2 text-sm font-bold text-slate-200 hover:border-amber-500 hover:text-amber-400";
pub const INPUT_NUMBER: &str = "w-16 rounded border border-slate-600 bg-[#0b0f19] px-1 py-1 text-center text-sm text-white shadow-inner focus:border-amber-500 focus:outline-none";
