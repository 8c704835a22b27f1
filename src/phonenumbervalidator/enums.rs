// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

/// Categorizes phone numbers based on their primary use.
///
/// Every country carries its own pattern for each category it supports;
/// a number may match several categories at once.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline telephone numbers tied to a geographic location.
    FixedLine,
    /// **Mobile numbers.**
    /// Numbers assigned to wireless devices like mobile phones.
    Mobile,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller.
    TollFree,
    /// **Premium-rate numbers.**
    /// These numbers charge a higher rate than normal calls.
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Personal numbers.**
    /// A number associated with a person and routed to a device of their choice.
    PersonalNumber,
    /// **Voice over IP (VoIP) numbers.**
    VoIP,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    /// A single number a company uses to route calls to different offices.
    UAN,
    /// **Emergency numbers.**
    Emergency,
    /// **Voicemail access numbers.**
    VoiceMail,
    /// **Short codes.**
    ShortCode,
    /// **Standard-rate numbers.**
    StandardRate,
    /// **Carrier-specific numbers.**
    /// Only reachable from within a particular carrier's network.
    CarrierSpecific,
    /// **No international dialling.**
    /// Numbers that can't be dialled from outside the country.
    NoInternationalDialling,
}
